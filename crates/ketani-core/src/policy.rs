//! Legal policies shown in the policy modal.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Privacy,
    Cookies,
}

#[derive(Debug)]
pub struct Policy {
    pub title: &'static str,
    /// `(year, month)` of the last revision.
    updated: (i32, u32),
    /// Numbered `(heading, body)` sections.
    pub sections: &'static [(&'static str, &'static str)],
}

impl Policy {
    pub fn updated(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.updated.0, self.updated.1, 1)
    }

    /// e.g. `Last updated: January 2026`.
    pub fn updated_label(&self) -> String {
        match self.updated() {
            Some(date) => format!("Last updated: {}", date.format("%B %Y")),
            None => "Last updated: unknown".to_string(),
        }
    }
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 2] = [PolicyKind::Privacy, PolicyKind::Cookies];

    /// Unknown names fall back to the privacy policy.
    pub fn from_name(name: &str) -> PolicyKind {
        match name.trim().to_ascii_lowercase().as_str() {
            "cookie" | "cookies" => PolicyKind::Cookies,
            _ => PolicyKind::Privacy,
        }
    }

    pub fn next(self) -> PolicyKind {
        match self {
            PolicyKind::Privacy => PolicyKind::Cookies,
            PolicyKind::Cookies => PolicyKind::Privacy,
        }
    }

    pub fn policy(self) -> &'static Policy {
        match self {
            PolicyKind::Privacy => &PRIVACY,
            PolicyKind::Cookies => &COOKIES,
        }
    }
}

static PRIVACY: Policy = Policy {
    title: "Privacy Policy",
    updated: (2026, 1),
    sections: &[
        (
            "1. Data Collection & Usage",
            "Ketani Logistics collects information necessary to facilitate the transportation of bulk commodities, including shipper details, cargo specifications, and tracking data.",
        ),
        (
            "2. Compliance & Legal",
            "Our data practices are overseen by our Legal Department to ensure compliance with Zimbabwean law and international trade regulations.",
        ),
        (
            "3. Contact Information",
            "For privacy-related inquiries contact our Legal Advisor at legal@ketanilogistics.com.",
        ),
    ],
};

static COOKIES: Policy = Policy {
    title: "Cookie Policy",
    updated: (2026, 1),
    sections: &[
        (
            "1. Use of Cookies",
            "We use cookies to enhance user experience, track shipment query performance, and remember regional service preferences.",
        ),
        (
            "2. Essential vs. Analytics",
            "Essential cookies support the Track Shipment and Get Quote functions. Analytics cookies help us understand global traffic sources.",
        ),
        (
            "3. Managing Preferences",
            "You can disable cookies via your browser settings, though this may impact the functionality of our tracking tools.",
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updated_label_formats_month() {
        assert_eq!(
            PolicyKind::Privacy.policy().updated_label(),
            "Last updated: January 2026"
        );
    }

    #[test]
    fn unknown_name_falls_back_to_privacy() {
        assert_eq!(PolicyKind::from_name("terms"), PolicyKind::Privacy);
        assert_eq!(PolicyKind::from_name(" Cookies "), PolicyKind::Cookies);
    }

    #[test]
    fn next_cycles() {
        assert_eq!(PolicyKind::Privacy.next().next(), PolicyKind::Privacy);
    }
}
