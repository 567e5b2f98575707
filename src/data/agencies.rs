//! Reporting agency directory.
//!
//! Covers the three major credit bureaus plus consumer, employment and
//! tenant screening agencies, with the contact details a consumer needs
//! to request their file or mail a dispute.

use serde::Serialize;
use utoipa::ToSchema;

/// Category of reporting agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AgencyType {
    Credit,
    Consumer,
    Employment,
    Tenant,
}

impl AgencyType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "credit" => Some(Self::Credit),
            "consumer" => Some(Self::Consumer),
            "employment" => Some(Self::Employment),
            "tenant" => Some(Self::Tenant),
            _ => None,
        }
    }
}

/// One agency record.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportingAgency {
    pub id: &'static str,
    pub name: &'static str,
    pub r#type: AgencyType,
    pub description: &'static str,
    pub website: &'static str,
    pub phone: &'static str,
    pub dispute_address: &'static str,
    pub online_dispute: bool,
    pub processing_time: &'static str,
    pub cost: &'static str,
    pub frequency: &'static str,
}

const CREDIT_BUREAUS: &[ReportingAgency] = &[
    ReportingAgency {
        id: "experian",
        name: "Experian",
        r#type: AgencyType::Credit,
        description: "One of the three major credit reporting agencies",
        website: "https://www.experian.com",
        phone: "1-888-397-3742",
        dispute_address: "P.O. Box 4500, Allen, TX 75013",
        online_dispute: true,
        processing_time: "30 days",
        cost: "Free annually",
        frequency: "Once per year free",
    },
    ReportingAgency {
        id: "equifax",
        name: "Equifax",
        r#type: AgencyType::Credit,
        description: "One of the three major credit reporting agencies",
        website: "https://www.equifax.com",
        phone: "1-866-349-5191",
        dispute_address: "P.O. Box 740256, Atlanta, GA 30374",
        online_dispute: true,
        processing_time: "30 days",
        cost: "Free annually",
        frequency: "Once per year free",
    },
    ReportingAgency {
        id: "transunion",
        name: "TransUnion",
        r#type: AgencyType::Credit,
        description: "One of the three major credit reporting agencies",
        website: "https://www.transunion.com",
        phone: "1-800-916-8800",
        dispute_address: "P.O. Box 2000, Chester, PA 19016",
        online_dispute: true,
        processing_time: "30 days",
        cost: "Free annually",
        frequency: "Once per year free",
    },
];

const CONSUMER_AGENCIES: &[ReportingAgency] = &[
    ReportingAgency {
        id: "lexisnexis",
        name: "LexisNexis",
        r#type: AgencyType::Consumer,
        description: "Comprehensive consumer and background reporting",
        website: "https://consumer.risk.lexisnexis.com",
        phone: "1-888-497-0011",
        dispute_address: "LexisNexis Consumer Center, P.O. Box 105108, Atlanta, GA 30348",
        online_dispute: true,
        processing_time: "30 days",
        cost: "Free annually",
        frequency: "Once per year free",
    },
    ReportingAgency {
        id: "corelogic",
        name: "CoreLogic",
        r#type: AgencyType::Consumer,
        description: "Property and consumer information services",
        website: "https://www.corelogic.com/consumer-services",
        phone: "1-800-637-2422",
        dispute_address: "CoreLogic Credco, P.O. Box 509124, San Diego, CA 92150",
        online_dispute: true,
        processing_time: "30 days",
        cost: "Free annually",
        frequency: "Once per year free",
    },
];

const EMPLOYMENT_AGENCIES: &[ReportingAgency] = &[
    ReportingAgency {
        id: "hireright",
        name: "HireRight",
        r#type: AgencyType::Employment,
        description: "Employment background screening services",
        website: "https://www.hireright.com",
        phone: "1-800-400-2761",
        dispute_address: "HireRight Consumer Relations, 5151 California Ave, Irvine, CA 92617",
        online_dispute: true,
        processing_time: "30 days",
        cost: "Free annually",
        frequency: "Once per year free",
    },
    ReportingAgency {
        id: "sterling",
        name: "Sterling",
        r#type: AgencyType::Employment,
        description: "Background screening and identity services",
        website: "https://www.sterlingcheck.com",
        phone: "1-800-853-3228",
        dispute_address: "Sterling Consumer Advocacy, 1 State Street Plaza, New York, NY 10004",
        online_dispute: true,
        processing_time: "30 days",
        cost: "Free annually",
        frequency: "Once per year free",
    },
];

const TENANT_AGENCIES: &[ReportingAgency] = &[
    ReportingAgency {
        id: "transunion-smartmove",
        name: "TransUnion SmartMove",
        r#type: AgencyType::Tenant,
        description: "Tenant screening and rental background checks",
        website: "https://www.mysmartmove.com",
        phone: "1-877-787-6686",
        dispute_address: "TransUnion SmartMove, P.O. Box 1000, Chester, PA 19016",
        online_dispute: true,
        processing_time: "30 days",
        cost: "Free annually",
        frequency: "Once per year free",
    },
    ReportingAgency {
        id: "rentspree",
        name: "RentSpree",
        r#type: AgencyType::Tenant,
        description: "Rental application and tenant screening platform",
        website: "https://www.rentspree.com",
        phone: "1-844-736-8773",
        dispute_address: "RentSpree Consumer Services, 12100 Wilshire Blvd, Los Angeles, CA 90025",
        online_dispute: true,
        processing_time: "30 days",
        cost: "Free annually",
        frequency: "Once per year free",
    },
];

/// All known agencies, credit bureaus first.
pub fn all_agencies() -> Vec<&'static ReportingAgency> {
    CREDIT_BUREAUS
        .iter()
        .chain(CONSUMER_AGENCIES)
        .chain(EMPLOYMENT_AGENCIES)
        .chain(TENANT_AGENCIES)
        .collect()
}

/// Agencies of one category.
pub fn agencies_by_type(agency_type: AgencyType) -> Vec<&'static ReportingAgency> {
    let group: &[ReportingAgency] = match agency_type {
        AgencyType::Credit => CREDIT_BUREAUS,
        AgencyType::Consumer => CONSUMER_AGENCIES,
        AgencyType::Employment => EMPLOYMENT_AGENCIES,
        AgencyType::Tenant => TENANT_AGENCIES,
    };
    group.iter().collect()
}

/// Look up an agency by its id. Unknown ids return None.
pub fn agency_by_id(id: &str) -> Option<&'static ReportingAgency> {
    all_agencies().into_iter().find(|agency| agency.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agency_by_id() {
        let experian = agency_by_id("experian").unwrap();
        assert_eq!(experian.name, "Experian");
        assert_eq!(experian.dispute_address, "P.O. Box 4500, Allen, TX 75013");
        assert_eq!(experian.phone, "1-888-397-3742");

        assert!(agency_by_id("unknown-agency").is_none());
    }

    #[test]
    fn test_agencies_by_type() {
        let bureaus = agencies_by_type(AgencyType::Credit);
        assert_eq!(bureaus.len(), 3);
        assert!(bureaus.iter().all(|a| a.r#type == AgencyType::Credit));

        assert_eq!(agencies_by_type(AgencyType::Tenant).len(), 2);
    }

    #[test]
    fn test_all_agencies_unique_ids() {
        let agencies = all_agencies();
        assert_eq!(agencies.len(), 9);

        let mut ids: Vec<_> = agencies.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 9);
    }
}
