use std::fmt;

/// Names joined for a one-line summary.
pub fn game_names<S: AsRef<str>>(names: &[S]) -> String {
    names.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferBadge {
    New,
    Offer,
}

impl fmt::Display for OfferBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfferBadge::New => write!(f, "New"),
            OfferBadge::Offer => write!(f, "Offer"),
        }
    }
}

/// Games released this year (or announced for later) are new, older ones are on offer.
pub fn offer_badge(release_year: i32, current_year: i32) -> OfferBadge {
    if release_year >= current_year {
        OfferBadge::New
    } else {
        OfferBadge::Offer
    }
}
