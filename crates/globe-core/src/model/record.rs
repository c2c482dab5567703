// crates/globe-core/src/model/record.rs
use crate::distance::GeoPoint;
use crate::error::{GlobeError, Result};
use crate::parser::{Column, RawRow};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::str::FromStr;

/// GeoNames identifier of a city.
pub type GeonameId = u32;

/// One city of the dataset. Built once from a [`RawRow`] and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CityRecord {
    id: GeonameId,
    name: String,
    ascii_name: String,
    /// Deduplicated; order carries no meaning.
    alternate_names: Vec<String>,
    latitude: f64,
    longitude: f64,
    feature_class: Option<String>,
    feature_code: Option<String>,
    country_code: String,
    alternate_country_codes: Vec<String>,
    admin1_code: Option<String>,
    admin2_code: Option<String>,
    admin3_code: Option<String>,
    admin4_code: Option<String>,
    population: Option<i64>,
    elevation: Option<i64>,
    dem: Option<i64>,
    timezone: Option<String>,
    modification_date: NaiveDate,
}

impl CityRecord {
    /// Validates and converts a raw row.
    ///
    /// Fails with [`GlobeError::RecordInvalid`] naming the first bad field.
    pub fn from_row(row: &RawRow) -> Result<Self> {
        let field = RowFields(row);

        let id: GeonameId = field.parse(Column::GeonameId)?;
        if id == 0 {
            return Err(field.invalid(Column::GeonameId, "must be positive"));
        }

        let latitude: f64 = field.parse(Column::Latitude)?;
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(field.invalid(Column::Latitude, "out of range [-90, 90]"));
        }
        let longitude: f64 = field.parse(Column::Longitude)?;
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(field.invalid(Column::Longitude, "out of range [-180, 180]"));
        }

        let country_code = row.get(Column::CountryCode);
        if country_code.len() != 2 || !country_code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(field.invalid(Column::CountryCode, "expected two uppercase letters"));
        }

        let date = row.get(Column::ModificationDate);
        let modification_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| field.invalid(Column::ModificationDate, e))?;

        Ok(Self {
            id,
            name: field.required(Column::Name)?,
            ascii_name: field.required(Column::AsciiName)?,
            alternate_names: dedup_list(row.get(Column::AlternateNames)),
            latitude,
            longitude,
            feature_class: field.optional(Column::FeatureClass),
            feature_code: field.optional(Column::FeatureCode),
            country_code: country_code.to_owned(),
            alternate_country_codes: dedup_list(row.get(Column::Cc2)),
            admin1_code: field.optional(Column::Admin1Code),
            admin2_code: field.optional(Column::Admin2Code),
            admin3_code: field.optional(Column::Admin3Code),
            admin4_code: field.optional(Column::Admin4Code),
            population: field.parse_optional(Column::Population)?,
            elevation: field.parse_optional(Column::Elevation)?,
            dem: field.parse_optional(Column::Dem)?,
            timezone: field.optional(Column::Timezone),
            modification_date,
        })
    }

    pub fn id(&self) -> GeonameId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ascii_name(&self) -> &str {
        &self.ascii_name
    }

    pub fn alternate_names(&self) -> &[String] {
        &self.alternate_names
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.longitude, self.latitude)
    }

    pub fn feature_class(&self) -> Option<&str> {
        self.feature_class.as_deref()
    }

    pub fn feature_code(&self) -> Option<&str> {
        self.feature_code.as_deref()
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn alternate_country_codes(&self) -> &[String] {
        &self.alternate_country_codes
    }

    /// Administrative codes, first to fourth order.
    pub fn admin_codes(&self) -> [Option<&str>; 4] {
        [
            self.admin1_code.as_deref(),
            self.admin2_code.as_deref(),
            self.admin3_code.as_deref(),
            self.admin4_code.as_deref(),
        ]
    }

    pub fn population(&self) -> Option<i64> {
        self.population
    }

    pub fn elevation(&self) -> Option<i64> {
        self.elevation
    }

    pub fn dem(&self) -> Option<i64> {
        self.dem
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    pub fn modification_date(&self) -> NaiveDate {
        self.modification_date
    }
}

/// Field access with errors that carry the row's line and column name.
struct RowFields<'a>(&'a RawRow);

impl RowFields<'_> {
    fn invalid(&self, column: Column, reason: impl ToString) -> GlobeError {
        GlobeError::RecordInvalid {
            line: self.0.line,
            field: column.header(),
            reason: reason.to_string(),
        }
    }

    fn required(&self, column: Column) -> Result<String> {
        let value = self.0.get(column);
        if value.is_empty() {
            return Err(self.invalid(column, "missing"));
        }
        Ok(value.to_owned())
    }

    fn optional(&self, column: Column) -> Option<String> {
        let value = self.0.get(column);
        (!value.is_empty()).then(|| value.to_owned())
    }

    fn parse<T>(&self, column: Column) -> Result<T>
    where
        T: FromStr,
        T::Err: ToString,
    {
        let value = self.0.get(column);
        if value.is_empty() {
            return Err(self.invalid(column, "missing"));
        }
        value
            .trim()
            .parse()
            .map_err(|e: T::Err| self.invalid(column, format!("{value:?}: {}", e.to_string())))
    }

    /// Empty means absent; anything else must parse.
    fn parse_optional<T>(&self, column: Column) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: ToString,
    {
        if self.0.get(column).is_empty() {
            return Ok(None);
        }
        self.parse(column).map(Some)
    }
}

fn dedup_list(value: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    value
        .split(',')
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(overrides: &[(Column, &str)]) -> RawRow {
        let mut fields: Vec<String> = [
            "3041563",
            "Andorra la Vella",
            "Andorra la Vella",
            "ALV,Andorra,Andorra la Vella,ALV",
            "42.50779",
            "1.52109",
            "P",
            "PPLC",
            "AD",
            "",
            "07",
            "",
            "",
            "",
            "20430",
            "",
            "1037",
            "Europe/Andorra",
            "2020-03-03",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        for (col, value) in overrides {
            fields[*col as usize] = value.to_string();
        }
        RawRow::new(7, fields).unwrap()
    }

    fn invalid_field(result: Result<CityRecord>) -> &'static str {
        match result {
            Err(GlobeError::RecordInvalid { line, field, .. }) => {
                assert_eq!(line, 7);
                field
            }
            other => panic!("expected RecordInvalid, got {other:?}"),
        }
    }

    #[test]
    fn builds_a_record() {
        let city = CityRecord::from_row(&row(&[])).unwrap();
        assert_eq!(city.id(), 3041563);
        assert_eq!(city.name(), "Andorra la Vella");
        assert_eq!(city.country_code(), "AD");
        assert_eq!(city.population(), Some(20430));
        assert_eq!(city.elevation(), None);
        assert_eq!(city.dem(), Some(1037));
        assert_eq!(city.timezone(), Some("Europe/Andorra"));
        assert_eq!(city.feature_code(), Some("PPLC"));
        assert_eq!(city.admin_codes(), [Some("07"), None, None, None]);
        assert!(city.alternate_country_codes().is_empty());
        assert_eq!(
            city.modification_date(),
            NaiveDate::from_ymd_opt(2020, 3, 3).unwrap()
        );
    }

    #[test]
    fn alternate_names_are_deduplicated() {
        let city = CityRecord::from_row(&row(&[])).unwrap();
        let mut names = city.alternate_names().to_vec();
        names.sort();
        assert_eq!(names, ["ALV", "Andorra", "Andorra la Vella"]);

        let bare = CityRecord::from_row(&row(&[(Column::AlternateNames, "")])).unwrap();
        assert!(bare.alternate_names().is_empty());
    }

    #[test]
    fn empty_numbers_are_absent_not_zero() {
        let city = CityRecord::from_row(&row(&[
            (Column::Population, ""),
            (Column::Dem, ""),
            (Column::Timezone, ""),
        ]))
        .unwrap();
        assert_eq!(city.population(), None);
        assert_eq!(city.dem(), None);
        assert_eq!(city.timezone(), None);
    }

    #[test]
    fn rejects_bad_fields() {
        let cases: &[(Column, &str)] = &[
            (Column::GeonameId, "abc"),
            (Column::GeonameId, "0"),
            (Column::GeonameId, "-4"),
            (Column::Name, ""),
            (Column::AsciiName, ""),
            (Column::Latitude, "91"),
            (Column::Latitude, "north"),
            (Column::Longitude, "-180.5"),
            (Column::Longitude, "NaN"),
            (Column::CountryCode, "ad"),
            (Column::CountryCode, "AND"),
            (Column::CountryCode, ""),
            (Column::Population, "many"),
            (Column::Elevation, "1.5"),
            (Column::ModificationDate, "2020/03/03"),
            (Column::ModificationDate, ""),
        ];
        for (col, value) in cases {
            let field = invalid_field(CityRecord::from_row(&row(&[(*col, value)])));
            assert_eq!(field, col.header(), "{value:?}");
        }
    }

    #[test]
    fn serializes_date_as_iso() {
        let city = CityRecord::from_row(&row(&[])).unwrap();
        let json = serde_json::to_value(&city).unwrap();
        assert_eq!(json["modification_date"], "2020-03-03");
        assert_eq!(json["elevation"], serde_json::Value::Null);
    }
}
