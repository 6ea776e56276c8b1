use jiff::civil::Date;
use serde::{Deserialize, Deserializer};

pub const MAX_STARS: u8 = 5;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Genre {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// One record of the catalog, as served by the catalog endpoint.
///
/// Only `id` and `title` are required. Missing or `null` text, money and
/// genre fields fall back to their empty value so one sparse record does not
/// fail the whole load. The same holds for a genre without a name.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tagline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
}

impl Movie {
    pub fn genre_names(&self, sep: &str) -> String {
        self.genres.iter().map(|g| g.name.as_str()).collect::<Vec<_>>().join(sep)
    }

    pub fn release_year(&self) -> Option<i16> {
        let raw = self.release_date.as_deref()?.trim();
        raw.parse::<Date>().ok().map(|d| d.year())
    }

    pub fn stars(&self) -> u8 {
        star_rating(self.vote_average)
    }
}

/// Maps a 0-10 vote average onto a 0-5 star scale.
///
/// Halves round away from zero, so 5.0 gives 3 stars. Values outside 0-10
/// clamp to the ends of the scale and NaN counts as no stars.
pub fn star_rating(vote_average: f64) -> u8 {
    if vote_average.is_nan() {
        return 0;
    }
    (vote_average / 2.0).round().clamp(0.0, f64::from(MAX_STARS)) as u8
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
