//! Static catalogs used across harnesses.

use super::builders::{catalog_of, SearchEntryBuilder};
use ketani::{Category, SearchCatalog};

/// Two-entry site: a logistics service page and the careers page.
pub fn logistics_and_careers() -> SearchCatalog {
    catalog_of(vec![
        SearchEntryBuilder::new("Logistics Services")
            .path("/logistics")
            .description("Comprehensive logistics and transportation solutions")
            .keywords(&["logistics", "transport", "shipping", "delivery", "freight"])
            .category(Category::Service)
            .build(),
        SearchEntryBuilder::new("Careers")
            .path("/careers")
            .description("Join our team - explore career opportunities")
            .keywords(&["careers", "jobs", "employment", "work", "join"])
            .build(),
    ])
}

/// One entry whose title, description and keywords share no words.
pub fn ocean_services() -> SearchCatalog {
    catalog_of(vec![SearchEntryBuilder::new("Ocean Services")
        .description("international shipping")
        .keywords(&["freight"])
        .category(Category::Service)
        .build()])
}

/// Three entries that all contain "port".
pub fn three_ports() -> SearchCatalog {
    catalog_of(vec![
        SearchEntryBuilder::new("Port Operations").build(),
        SearchEntryBuilder::new("Transport").build(),
        SearchEntryBuilder::new("Airport Transfers").build(),
    ])
}
