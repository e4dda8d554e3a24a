use placement_core::domain::CompanyAttributes;

pub fn acme() -> CompanyAttributes {
    CompanyAttributes {
        company_name: "Acme".to_string(),
        company_address: "1 Main St".to_string(),
        drive: "on-campus".to_string(),
        type_of_drive: "full-time".to_string(),
        package: "8 LPA".to_string(),
        assigned_officers: vec!["alice".to_string()],
        ..Default::default()
    }
}

/// Differs from [`acme`] in every attribute.
pub fn acme_revised() -> CompanyAttributes {
    CompanyAttributes {
        company_name: "Acme Corp".to_string(),
        company_address: "2 Side St".to_string(),
        drive: "off-campus".to_string(),
        type_of_drive: "internship".to_string(),
        follow_up: "call next week".to_string(),
        is_contacted: true,
        remarks: "revised".to_string(),
        contact_details: "hr@acme.test".to_string(),
        hr1_details: "Jane".to_string(),
        hr2_details: "John".to_string(),
        package: "10 LPA".to_string(),
        assigned_officers: vec!["bob".to_string(), "carol".to_string()],
    }
}
