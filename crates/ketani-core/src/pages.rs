//! Site pages and the static route table.
//!
//! Every navigable search result points at one of these routes. Paths are
//! resolved through a compile-time [`phf`] map; anything that is not a known
//! route is not a page.

use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Logistics,
    Commodities,
    About,
    Services,
    Careers,
    Contact,
    Media,
}

static ROUTES: phf::Map<&'static str, Page> = phf_map! {
    "/" => Page::Home,
    "/logistics" => Page::Logistics,
    "/commodities" => Page::Commodities,
    "/about" => Page::About,
    "/services" => Page::Services,
    "/careers" => Page::Careers,
    "/contact" => Page::Contact,
    "/hypermedia" => Page::Media,
};

/// Static copy rendered for a page.
#[derive(Debug)]
pub struct PageContent {
    pub headline: &'static str,
    /// `(heading, body)` pairs in display order.
    pub sections: &'static [(&'static str, &'static str)],
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Logistics,
        Page::Commodities,
        Page::About,
        Page::Services,
        Page::Careers,
        Page::Contact,
        Page::Media,
    ];

    /// Look up the page served at `path`. Trailing slashes are ignored.
    pub fn resolve(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        let key = if trimmed.is_empty() { "/" } else { trimmed };
        ROUTES.get(key).copied()
    }

    /// Match a user-typed page name or route, e.g. `about`, `/about`, `Media`.
    pub fn from_name(name: &str) -> Option<Page> {
        let name = name.trim();
        if name.starts_with('/') {
            return Page::resolve(name);
        }
        let lower = name.to_ascii_lowercase();
        Page::ALL
            .into_iter()
            .find(|p| p.title().to_ascii_lowercase() == lower || p.slug() == lower)
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Logistics => "/logistics",
            Page::Commodities => "/commodities",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Careers => "/careers",
            Page::Contact => "/contact",
            Page::Media => "/hypermedia",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Logistics => "logistics",
            Page::Commodities => "commodities",
            Page::About => "about",
            Page::Services => "services",
            Page::Careers => "careers",
            Page::Contact => "contact",
            Page::Media => "hypermedia",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Logistics => "Logistics",
            Page::Commodities => "Commodities",
            Page::About => "About Us",
            Page::Services => "Services",
            Page::Careers => "Careers",
            Page::Contact => "Contact",
            Page::Media => "Hypermedia & News",
        }
    }

    pub fn content(self) -> &'static PageContent {
        match self {
            Page::Home => &HOME,
            Page::Logistics => &LOGISTICS,
            Page::Commodities => &COMMODITIES,
            Page::About => &ABOUT,
            Page::Services => &SERVICES,
            Page::Careers => &CAREERS,
            Page::Contact => &CONTACT,
            Page::Media => &MEDIA,
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

// ---------------------------------------------------------------------------
// Page copy
// ---------------------------------------------------------------------------

static HOME: PageContent = PageContent {
    headline: "Seamless coordination of rail, port, and ocean freight operations.",
    sections: &[
        (
            "Integrated logistics",
            "We connect Southern Africa's resources to the global market with precision and reliability.",
        ),
        (
            "By the numbers",
            "50+ years combined experience. 6 global hubs. 1M+ tons moved annually. 100% compliance rate.",
        ),
    ],
};

static LOGISTICS: PageContent = PageContent {
    headline: "Providing seamless coordination from inland origin to global destination.",
    sections: &[
        (
            "Rail Logistics",
            "Rail forms a core pillar of our capability. We specialize in rail-based bulk solutions for high-volume commodities moving from inland producers to export gateways.",
        ),
        (
            "Port & Terminal Operations",
            "We manage warehousing and terminal operations across key Southern African export gateways, including bulk and break-bulk cargo handling, clearing and forwarding.",
        ),
        (
            "Global Ocean Freight",
            "Ocean freight connects regional origins to industrial markets in Asia, Europe, and the Americas.",
        ),
    ],
};

static COMMODITIES: PageContent = PageContent {
    headline: "Specialized transport for Ferrochrome, Lithium, Copper, and Agricultural Inputs.",
    sections: &[
        (
            "Mineral products",
            "We specialize in the efficient movement of mineral products, agricultural inputs, and project cargo across Southern Africa.",
        ),
        (
            "Project cargo",
            "Beyond bulk minerals we handle complex capital goods. Whether it's heavy mining machinery or agricultural equipment, we ensure safe and timely delivery to inland locations.",
        ),
    ],
};

static ABOUT: PageContent = PageContent {
    headline: "End-to-end cargo visibility and control.",
    sections: &[
        (
            "Our Vision",
            "To be the leading global provider of integrated logistics solutions, revolutionizing the transportation of bulk commodities across Southern Africa and beyond.",
        ),
        (
            "Our Mission",
            "We are committed to optimizing the movement of mineral products and agricultural inputs through multimodal logistics.",
        ),
        (
            "Our Strategic Footprint",
            "A strong operational footprint across Southern Africa, supporting export-oriented supply chains serving global markets.",
        ),
    ],
};

static SERVICES: PageContent = PageContent {
    headline: "Rail, road, port, and sea freight in a single coordinated solution.",
    sections: &[
        (
            "Rail Logistics",
            "Bulk mineral and commodity rail transport, rail siding and loading coordination, cross-border rail corridor management.",
        ),
        (
            "Warehousing & Port Operations",
            "Warehousing and terminal operations across key Southern African export gateways.",
        ),
        (
            "Ocean Freight",
            "Rail-to-port integration with onward sea freight to global destinations.",
        ),
    ],
};

static CAREERS: PageContent = PageContent {
    headline: "Build the future of logistics.",
    sections: &[
        (
            "Why join",
            "Join a team boasting over 50 years of combined experience, revolutionizing bulk commodity transport across Africa.",
        ),
        (
            "Open Positions",
            "We are always looking for talented individuals to help us optimize the movement of mineral products and agricultural inputs.",
        ),
    ],
};

static CONTACT: PageContent = PageContent {
    headline: "Global expertise, local presence. We are ready to move your business forward.",
    sections: &[
        (
            "Send a Message",
            "Need a quote or have a question? We respond within 24 hours.",
        ),
        ("Email", "info@ketanilogistics.com"),
    ],
};

static MEDIA: PageContent = PageContent {
    headline: "Explore our latest projects, video tours, and company news.",
    sections: &[
        ("Gallery", "A glimpse into our daily logistics operations."),
        ("Latest News", "Company updates and press releases."),
    ],
};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SearchCatalog;
    use rstest::rstest;

    #[test]
    fn every_page_resolves_to_itself() {
        for page in Page::ALL {
            assert_eq!(Page::resolve(page.path()), Some(page), "{page}");
        }
    }

    #[rstest]
    #[case("", Some(Page::Home))]
    #[case("/about/", Some(Page::About))]
    #[case("/Ketani_Logistics_Company_Profile.pdf", None)]
    #[case("/nope", None)]
    fn resolve_paths(#[case] path: &str, #[case] expected: Option<Page>) {
        assert_eq!(Page::resolve(path), expected);
    }

    #[rstest]
    #[case("about", Some(Page::About))]
    #[case("About Us", Some(Page::About))]
    #[case("MEDIA", None)]
    #[case("hypermedia", Some(Page::Media))]
    #[case("/careers", Some(Page::Careers))]
    #[case("blog", None)]
    fn names(#[case] name: &str, #[case] expected: Option<Page>) {
        assert_eq!(Page::from_name(name), expected);
    }

    #[test]
    fn navigable_catalog_entries_have_routes() {
        for entry in SearchCatalog::builtin().entries().filter(|e| !e.is_download) {
            assert!(
                Page::resolve(&entry.path).is_some(),
                "no route for {}",
                entry.path
            );
        }
    }
}
