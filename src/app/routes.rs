//! Navigation targets.

use crate::domain::HeroId;
use std::fmt;
use std::str::FromStr;

/// A screen of the catalog.
///
/// # Examples
///
/// ```
/// use hero_catalog::app::Route;
///
/// assert_eq!("/hero/edit/4".parse::<Route>(), Ok(Route::EditHero(4)));
/// assert_eq!("".parse::<Route>(), Ok(Route::Heroes));
/// assert_eq!(Route::NewHero.to_string(), "/hero/new");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Heroes,
    NewHero,
    EditHero(HeroId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heroes => f.write_str("/heroes"),
            Self::NewHero => f.write_str("/hero/new"),
            Self::EditHero(id) => write!(f, "/hero/edit/{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = String;

    /// Parses a path. The empty path redirects to [`Route::Heroes`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('/').filter(|seg| !seg.is_empty()).collect();
        match segments.as_slice() {
            [] | ["heroes"] => Ok(Self::Heroes),
            ["hero", "new"] => Ok(Self::NewHero),
            ["hero", "edit", id] => id
                .parse()
                .map(Self::EditHero)
                .map_err(|_| format!("invalid hero id in route: {id}")),
            _ => Err(format!("unknown route: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parses_back() {
        for route in [Route::Heroes, Route::NewHero, Route::EditHero(12)] {
            assert_eq!(route.to_string().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn rejects_unknown_paths() {
        assert!("/villains".parse::<Route>().is_err());
        assert!("/hero/edit/abc".parse::<Route>().is_err());
    }
}
