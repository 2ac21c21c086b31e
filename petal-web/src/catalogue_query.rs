//! Catalogue query coordinator
//!
//! `CatalogueQuery` is derived fresh from the URL query string on every
//! navigation and serialized back canonically; the address bar is the only
//! persisted copy of the filter state. Mutators work on the raw key/value
//! level so their observable behavior matches what a hand-edited URL does:
//! malformed values degrade to defaults, never to errors, and keys this
//! module does not recognize ride along untouched.

use std::fmt;

/// Sort orders accepted by the catalogue endpoint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    Name,
    Popularity,
    Recent,
}

impl SortBy {
    /// Parse a raw `sort_by` value. `alphabetical` is a legacy alias for
    /// `name`; anything unrecognized falls back to the default.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "name" | "alphabetical" => SortBy::Name,
            "popularity" => SortBy::Popularity,
            "recent" => SortBy::Recent,
            _ => SortBy::Name,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::Popularity => "popularity",
            SortBy::Recent => "recent",
        }
    }
}

/// Filter/sort/pagination state of the catalogue view
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogueQuery {
    pub name: String,
    pub sort_by: SortBy,
    /// Selected colors, insertion-ordered, no duplicates
    pub colors: Vec<String>,
    pub country: String,
    /// 1-based page
    pub page: u32,
    /// Pairs with keys this module does not own (tracking parameters and
    /// the like), preserved in arrival order across every mutation
    pub extra: Vec<(String, String)>,
}

impl Default for CatalogueQuery {
    fn default() -> Self {
        Self {
            name: String::new(),
            sort_by: SortBy::default(),
            colors: Vec::new(),
            country: String::new(),
            page: 1,
            extra: Vec::new(),
        }
    }
}

impl CatalogueQuery {
    /// Derive state from raw key/value pairs. Later occurrences of an
    /// owned key win; absent or malformed values take their defaults;
    /// unrecognized pairs collect into `extra` as-is.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key {
                "name" => query.name = value.to_string(),
                "sort_by" => query.sort_by = SortBy::parse(value),
                "color" => {
                    query.colors.clear();
                    for color in value.split(',').filter(|c| !c.is_empty()) {
                        if !query.colors.iter().any(|c| c == color) {
                            query.colors.push(color.to_string());
                        }
                    }
                }
                "country" => query.country = value.to_string(),
                "page" => {
                    query.page = value.parse::<u32>().ok().filter(|p| *p >= 1).unwrap_or(1);
                }
                _ => query.extra.push((key.to_string(), value.to_string())),
            }
        }
        query
    }

    /// Canonical pair representation: defaults are omitted, owned keys
    /// appear in the fixed order `name, sort_by, color, country, page`,
    /// then any preserved foreign pairs.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.name.is_empty() {
            pairs.push(("name".to_string(), self.name.clone()));
        }
        if self.sort_by != SortBy::Name {
            pairs.push(("sort_by".to_string(), self.sort_by.as_str().to_string()));
        }
        if !self.colors.is_empty() {
            pairs.push(("color".to_string(), self.colors.join(",")));
        }
        if !self.country.is_empty() {
            pairs.push(("country".to_string(), self.country.clone()));
        }
        if self.page > 1 {
            pairs.push(("page".to_string(), self.page.to_string()));
        }
        pairs.extend(self.extra.iter().cloned());
        pairs
    }

    /// Set one raw parameter, returning the resulting state. An empty value
    /// or the literal `"0"` deletes the key, restoring its default. Any
    /// mutation to a key other than `page` also deletes `page`, so a
    /// changed result set can never point at an out-of-range page.
    pub fn set_param(&self, key: &str, value: &str) -> Self {
        let mut pairs = self.to_pairs();
        pairs.retain(|(k, _)| k != key);
        if !value.is_empty() && value != "0" {
            pairs.push((key.to_string(), value.to_string()));
        }
        if key != "page" {
            pairs.retain(|(k, _)| k != "page");
        }
        Self::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Toggle membership of `color` in the selected set (symmetric
    /// difference). Resets pagination like any other filter change.
    pub fn toggle_color(&self, color: &str) -> Self {
        let mut colors = self.colors.clone();
        if let Some(pos) = colors.iter().position(|c| c == color) {
            colors.remove(pos);
        } else {
            colors.push(color.to_string());
        }
        self.set_param("color", &colors.join(","))
    }

    /// Number of filter/sort dimensions set to a non-default value.
    /// Recomputed from the state alone; drives the filter badge.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if !self.name.is_empty() {
            count += 1;
        }
        if !self.colors.is_empty() {
            count += 1;
        }
        if !self.country.is_empty() {
            count += 1;
        }
        if self.sort_by != SortBy::Name {
            count += 1;
        }
        count
    }

    /// Serialize to a query string without the leading `?`. Empty for the
    /// default state.
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Parse a raw query string (no leading `?`) into decoded pairs. Segments
/// without a value parse as an empty value; undecodable segments are kept
/// as-is rather than dropped.
fn parse_query_string(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            let decode = |s: &str| {
                urlencoding::decode(s)
                    .map(|c| c.into_owned())
                    .unwrap_or_else(|_| s.to_string())
            };
            (decode(key), decode(value))
        })
        .collect()
}

/// Router integration: the catalogue route captures its whole query string
/// into a `CatalogueQuery`.
impl From<&str> for CatalogueQuery {
    fn from(query: &str) -> Self {
        let pairs = parse_query_string(query.strip_prefix('?').unwrap_or(query));
        Self::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

impl fmt::Display for CatalogueQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(raw: &str) -> CatalogueQuery {
        CatalogueQuery::from(raw)
    }

    #[test]
    fn defaults_on_empty_query() {
        let query = derive("");
        assert_eq!(query, CatalogueQuery::default());
        assert_eq!(query.page, 1);
        assert_eq!(query.sort_by, SortBy::Name);
        assert_eq!(query.active_filter_count(), 0);
    }

    #[test]
    fn derive_is_idempotent_through_serialization() {
        let raws = [
            "",
            "name=rose",
            "name=lily&page=3&color=red,blue&sort_by=recent&country=France",
            "sort_by=alphabetical&page=abc",
            "color=,,red,,red,&page=0&junk=1",
            "name=wild%20rose&country=C%C3%B4te%20d%27Ivoire",
        ];
        for raw in raws {
            let once = derive(raw);
            let twice = derive(&once.to_query_string());
            assert_eq!(once, twice, "raw input: {raw:?}");
        }
    }

    #[test]
    fn legacy_alphabetical_maps_to_name() {
        assert_eq!(derive("sort_by=alphabetical").sort_by, SortBy::Name);
        assert_eq!(derive("sort_by=nonsense").sort_by, SortBy::Name);
        assert_eq!(derive("sort_by=popularity").sort_by, SortBy::Popularity);
    }

    #[test]
    fn malformed_page_defaults_to_one() {
        assert_eq!(derive("page=abc").page, 1);
        assert_eq!(derive("page=0").page, 1);
        assert_eq!(derive("page=-2").page, 1);
        assert_eq!(derive("page=").page, 1);
        assert_eq!(derive("page=7").page, 7);
    }

    #[test]
    fn color_list_drops_empty_segments_and_duplicates() {
        let query = derive("color=,red,,blue,red,");
        assert_eq!(query.colors, vec!["red".to_string(), "blue".to_string()]);
    }

    #[test]
    fn set_param_resets_page_for_other_keys() {
        let query = derive("name=lily&page=5");
        assert_eq!(query.set_param("country", "France").page, 1);
        assert_eq!(query.set_param("sort_by", "recent").page, 1);
        assert_eq!(query.set_param("name", "rose").page, 1);
        // page itself may be set without being clobbered
        assert_eq!(query.set_param("page", "9").page, 9);
    }

    #[test]
    fn empty_value_restores_the_default() {
        let query = derive("name=lily&color=red&country=France&sort_by=recent");
        assert_eq!(query.set_param("name", "").name, "");
        assert!(query.set_param("color", "").colors.is_empty());
        assert_eq!(query.set_param("country", "").country, "");
        assert_eq!(query.set_param("sort_by", "").sort_by, SortBy::Name);
        // the literal "0" deletes too
        assert_eq!(query.set_param("page", "0").page, 1);
    }

    #[test]
    fn active_filter_count_per_dimension() {
        assert_eq!(CatalogueQuery::default().active_filter_count(), 0);
        assert_eq!(derive("name=rose&color=red&sort_by=name").active_filter_count(), 2);
        assert_eq!(
            derive("name=rose&color=red&country=France&sort_by=recent").active_filter_count(),
            4
        );
        // page alone is not a filter
        assert_eq!(derive("page=4").active_filter_count(), 0);
    }

    #[test]
    fn color_toggle_is_a_symmetric_difference() {
        let query = derive("color=red,blue");
        let toggled = query.toggle_color("blue");
        assert_eq!(toggled.colors, vec!["red".to_string()]);
        let added = query.toggle_color("white");
        assert!(added.colors.iter().any(|c| c == "white"));
        // toggling twice restores membership
        let round_trip = query.toggle_color("white").toggle_color("white");
        assert_eq!(round_trip.colors, query.colors);
    }

    #[test]
    fn toggling_a_color_resets_pagination() {
        let query = derive("color=red&page=3");
        assert_eq!(query.toggle_color("blue").page, 1);
    }

    #[test]
    fn changing_country_drops_the_page_key_from_the_url() {
        let query = derive("name=lily&page=3");
        let next = query.set_param("country", "France");
        assert_eq!(next.to_query_string(), "name=lily&country=France");
    }

    #[test]
    fn default_state_serializes_to_an_empty_query() {
        assert_eq!(CatalogueQuery::default().to_query_string(), "");
        assert_eq!(derive("sort_by=name&page=1").to_query_string(), "");
    }

    #[test]
    fn percent_encoded_values_round_trip() {
        let query = derive("name=wild%20rose&country=C%C3%B4te%20d%27Ivoire");
        assert_eq!(query.name, "wild rose");
        assert_eq!(query.country, "Côte d'Ivoire");
        assert_eq!(derive(&query.to_query_string()), query);
    }

    #[test]
    fn foreign_keys_survive_mutations() {
        let query = derive("name=rose&utm_source=mail");
        assert_eq!(query.name, "rose");
        assert_eq!(query.to_query_string(), "name=rose&utm_source=mail");

        let next = query.set_param("country", "France");
        assert_eq!(
            next.to_query_string(),
            "name=rose&country=France&utm_source=mail"
        );
        let toggled = next.toggle_color("red");
        assert_eq!(
            toggled.extra,
            vec![("utm_source".to_string(), "mail".to_string())]
        );
    }

    #[test]
    fn foreign_keys_do_not_count_as_filters() {
        assert_eq!(derive("utm_source=mail").active_filter_count(), 0);
    }
}
