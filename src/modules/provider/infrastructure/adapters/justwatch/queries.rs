//! JustWatch GraphQL queries
//!
//! Only the fields the mapper reads are selected.

pub const SEARCH_OPERATION: &str = "GetSuggestedTitles";
pub const DETAILS_OPERATION: &str = "GetUrlTitleDetails";
pub const SIMILAR_OPERATION: &str = "GetSimilarTitles";

pub const SEARCH_PAGE_SIZE: u32 = 4;
pub const DETAILS_OFFER_PAGE_SIZE: u32 = 10;
pub const DETAILS_EPISODE_LIMIT: u32 = 20;
pub const SIMILAR_PAGE_SIZE: u32 = 8;

/// Title suggestions for a free-text query
pub const SEARCH_QUERY: &str = r#"
query GetSuggestedTitles($country: Country!, $language: Language!, $first: Int!, $filter: TitleFilter) {
  popularTitles(country: $country, first: $first, filter: $filter) {
    edges {
      node {
        id
        objectType
        content(country: $country, language: $language) {
          title
          originalReleaseYear
          posterUrl
          fullPath
        }
      }
    }
  }
}
"#;

/// Full title details and offers, keyed by the title's URL path
pub const DETAILS_QUERY: &str = r#"
query GetUrlTitleDetails($fullPath: String!, $country: Country!, $language: Language!, $episodeMaxLimit: Int, $platform: Platform! = WEB, $first: Int! = 10) {
  urlV2(fullPath: $fullPath) {
    id
    node {
      id
      objectType
      ... on MovieOrShowOrSeason {
        offers(country: $country, platform: $platform, filter: {preAffiliate: true}) {
          presentationType
          monetizationType
          retailPrice(language: $language)
          standardWebURL
          audioLanguages(language: $language)
          subtitleLanguages
          package {
            clearName
            iconWide(profile: S160)
          }
        }
        content(country: $country, language: $language) {
          title
          originalTitle
          isReleased
          originalReleaseYear
          shortDescription
          genres {
            translation(language: $language)
          }
          scoring {
            imdbScore
            imdbVotes
            tmdbScore
            tmdbPopularity
            tomatoMeter
          }
          posterUrl
          backdrops {
            backdropUrl
          }
          fullPath
          productionCountries
          runtime
          ageCertification
        }
      }
    }
  }
}
"#;

/// Recommendations for a title node id
pub const SIMILAR_QUERY: &str = r#"
query GetSimilarTitles($country: Country!, $titleId: ID!, $language: Language!, $filters: TitleFilter, $first: Int! = 12) {
  node(id: $titleId) {
    id
    ... on MovieOrShow {
      similarTitlesV2(country: $country, filter: $filters, first: $first) {
        edges {
          node {
            id
            objectType
            content(country: $country, language: $language) {
              title
              posterUrl
              fullPath
              genres {
                translation(language: $language)
              }
              scoring {
                imdbVotes
                imdbScore
                tomatoMeter
              }
            }
          }
        }
      }
    }
  }
}
"#;

/// Browser-like headers the public endpoint expects.
pub const REQUEST_HEADERS: [(&str, &str); 15] = [
    ("accept", "*/*"),
    ("accept-language", "en-US,en;q=0.7"),
    ("app-version", "3.9.3-web-web"),
    ("content-type", "application/json"),
    ("device-id", "w74RDcKnCcKDQRzCC1bDiM"),
    ("priority", "u=1, i"),
    (
        "sec-ch-ua",
        r#""Brave";v="135", "Not-A.Brand";v="8", "Chromium";v="135""#,
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", r#""macOS""#),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-site"),
    ("sec-gpc", "1"),
    ("Referer", "https://www.justwatch.com/"),
    ("Referrer-Policy", "strict-origin-when-cross-origin"),
];
