//! Route table for the two views and the scroll policy applied on navigation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    MapVisualization,
}

impl Route {
    pub const ALL: [Self; 2] = [Self::Landing, Self::MapVisualization];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::MapVisualization => "/maps",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Landing => "Landing",
            Self::MapVisualization => "MapVisualization",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Landing => "Overview",
            Self::MapVisualization => "Maps",
        }
    }
}

/// A resolved location: the route plus its fragment, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub hash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Element { id: String, smooth: bool },
    Top,
}

/// Resolves `path[?query][#hash]` against the route table.
pub fn resolve(location: &str) -> Option<Navigation> {
    let (rest, hash) = match location.split_once('#') {
        Some((rest, hash)) => (rest, Some(hash)),
        None => (location, None),
    };
    let path = rest.split_once('?').map_or(rest, |(path, _)| path);
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    let route = Route::ALL.into_iter().find(|route| route.path() == path)?;
    Some(Navigation {
        route,
        hash: hash.filter(|h| !h.is_empty()).map(ToString::to_string),
    })
}

/// Fragment navigation scrolls smoothly to the element; everything else
/// starts at the top.
pub fn scroll_behavior(navigation: &Navigation) -> ScrollTarget {
    navigation
        .hash
        .as_ref()
        .map_or(ScrollTarget::Top, |id| ScrollTarget::Element {
            id: id.clone(),
            smooth: true,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_views() {
        assert_eq!(resolve("/").map(|n| n.route), Some(Route::Landing));
        assert_eq!(resolve("").map(|n| n.route), Some(Route::Landing));
        assert_eq!(resolve("/maps").map(|n| n.route), Some(Route::MapVisualization));
        assert_eq!(resolve("/maps/").map(|n| n.route), Some(Route::MapVisualization));
        assert_eq!(resolve("/maps?country=kenya").map(|n| n.route), Some(Route::MapVisualization));
        assert_eq!(resolve("/about"), None);
    }

    #[test]
    fn hash_scrolls_smoothly_to_element() {
        let navigation = resolve("/maps#hotspots");
        assert_eq!(
            navigation.as_ref().map(scroll_behavior),
            Some(ScrollTarget::Element {
                id: "hotspots".into(),
                smooth: true
            })
        );
    }

    #[test]
    fn no_hash_scrolls_to_top() {
        let navigation = resolve("/#");
        assert_eq!(navigation.as_ref().map(scroll_behavior), Some(ScrollTarget::Top));
        assert_eq!(resolve("/maps").as_ref().map(scroll_behavior), Some(ScrollTarget::Top));
    }

    #[test]
    fn names_match_views() {
        assert_eq!(Route::Landing.name(), "Landing");
        assert_eq!(Route::MapVisualization.name(), "MapVisualization");
    }
}
