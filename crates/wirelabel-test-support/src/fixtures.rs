//! Sample labelled enums covering the interesting table shapes.

use wirelabel_core::labeled_enum;

labeled_enum! {
    /// Mixed enum: two labelled members around an unlabelled one.
    pub enum Status {
        /// Live record.
        Active => "ACTIVE",
        /// Written under its identifier.
        Paused,
        /// Soft-deleted record.
        Deleted => "DEL",
    }
}

labeled_enum! {
    /// Every member carries a label that differs from its identifier.
    pub enum Protocol {
        /// OpenID Connect.
        OpenIdConnect => "openid-connect",
        /// SAML 2.0.
        Saml => "saml",
        /// Docker registry v2.
        DockerV2 => "docker-v2",
    }
}

labeled_enum! {
    /// No member declares a label.
    pub enum Weekday {
        /// Monday.
        Monday,
        /// Tuesday.
        Tuesday,
        /// Wednesday.
        Wednesday,
    }
}

labeled_enum! {
    /// One member's label equals another member's identifier.
    pub enum Shadow {
        /// Written as `"Secondary"`.
        Primary => "Secondary",
        /// Unlabelled; its identifier collides with `Primary`'s label.
        Secondary,
    }
}

labeled_enum! {
    /// Two members share a label.
    pub enum Clash {
        /// Declared first with the shared label.
        First => "same",
        /// Declared last with the shared label.
        Second => "same",
    }
}

/// Every `Status` member in declaration order.
pub const ALL_STATUS: [Status; 3] = [Status::Active, Status::Paused, Status::Deleted];

/// Strings that match no label or identifier of any fixture enum.
pub const UNKNOWN_LABELS: [&str; 5] = ["not-a-real-label", "", "active", " ACTIVE", "DEL "];
