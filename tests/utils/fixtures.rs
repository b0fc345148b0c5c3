/// Upstream response bodies shaped like the JustWatch GraphQL API
use serde_json::{json, Value};

pub fn search_response() -> Value {
    json!({
        "data": {
            "popularTitles": {
                "edges": [
                    {"node": {"id": "tm1", "objectType": "MOVIE", "content": {
                        "title": "Dune",
                        "originalReleaseYear": 2021,
                        "posterUrl": "/poster/249/{profile}/dune.{format}",
                        "fullPath": "/us/movie/dune-2021"
                    }}},
                    {"node": {"id": "tm2", "objectType": "MOVIE", "content": {
                        "title": "Dune: The Making Of",
                        "originalReleaseYear": 2021,
                        "posterUrl": null,
                        "fullPath": null
                    }}},
                    {"node": {"id": "ts3", "objectType": "SHOW", "content": {
                        "title": "Dune: Prophecy",
                        "originalReleaseYear": 2024,
                        "fullPath": "/us/tv-show/dune-prophecy"
                    }}}
                ]
            }
        }
    })
}

pub fn offer(monetization: &str, presentation: &str, provider: &str, link: &str) -> Value {
    json!({
        "presentationType": presentation,
        "monetizationType": monetization,
        "retailPrice": null,
        "standardWebURL": link,
        "audioLanguages": ["en", "de"],
        "subtitleLanguages": ["en"],
        "package": {
            "clearName": provider,
            "iconWide": "/icon_wide/322/{profile}/netflix.{format}"
        }
    })
}

pub fn details_response() -> Value {
    json!({
        "data": {
            "urlV2": {
                "id": "url-1",
                "node": {
                    "id": "tm1",
                    "objectType": "MOVIE",
                    "offers": [
                        offer("FLATRATE", "HD", "Netflix", "https://netflix.com/title/1"),
                        offer("FLATRATE", "_4K", "Netflix", "https://netflix.com/title/1?4k"),
                        offer("FLATRATE", "SD", "Netflix", "https://netflix.com/title/1"),
                        offer("RENT", "HD", "Apple TV", "https://tv.apple.com/dune"),
                        offer("BUY", "UHD", "Apple TV", "https://tv.apple.com/dune/buy"),
                        offer("CINEMA", "", "AMC", "")
                    ],
                    "content": {
                        "title": "Dune",
                        "originalTitle": "Dune",
                        "isReleased": true,
                        "originalReleaseYear": 2021,
                        "shortDescription": "Paul Atreides travels to Arrakis.",
                        "genres": [{"translation": "Science-Fiction"}, {"translation": "Drama"}],
                        "scoring": {
                            "imdbScore": 8.0,
                            "imdbVotes": 900000,
                            "tmdbScore": 7.8,
                            "tmdbPopularity": 120.5,
                            "tomatoMeter": 83
                        },
                        "posterUrl": "/poster/249/{profile}/dune.{format}",
                        "backdrops": [{"backdropUrl": "/backdrop/1/{profile}/dune.{format}"}],
                        "fullPath": "/us/movie/dune-2021",
                        "productionCountries": ["US", "CA"],
                        "runtime": 155,
                        "ageCertification": "PG-13"
                    }
                }
            }
        }
    })
}

pub fn similar_response() -> Value {
    json!({
        "data": {
            "node": {
                "id": "tm1",
                "similarTitlesV2": {
                    "edges": [
                        {"node": {"id": "tm10", "objectType": "MOVIE", "content": {
                            "title": "Blade Runner 2049",
                            "posterUrl": "/poster/10/{profile}/br2049.{format}",
                            "fullPath": "/us/movie/blade-runner-2049",
                            "genres": [{"translation": "Science-Fiction"}],
                            "scoring": {"imdbVotes": 650000, "imdbScore": 8.0, "tomatoMeter": 88}
                        }}},
                        {"node": {"id": "tm11", "objectType": "MOVIE", "content": {
                            "title": "Arrival",
                            "posterUrl": null,
                            "fullPath": "",
                            "genres": null,
                            "scoring": null
                        }}}
                    ]
                }
            }
        }
    })
}

pub fn graphql_error_response() -> Value {
    json!({
        "data": null,
        "errors": [{"message": "Variable \"$country\" got invalid value \"XX\""}]
    })
}
