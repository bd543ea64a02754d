use fake::{Dummy, Fake, Faker};
use nik_parser::{century_for, Gender, Nik, NikCode, NikConfig, NikError, NikParser, RegionTable};
use std::io::Write;

const REGIONS_JSON: &str = r#"{
    "provinsi": { "31": "DKI Jakarta", "32": "Jawa Barat" },
    "kabkot": { "3171": "Kota Adm. Jakarta Selatan", "3273": "Kota Bandung" },
    "kecamatan": { "317105": "Kebayoran Lama -- 12240" }
}"#;

#[derive(Debug, Dummy)]
struct BirthFields {
    #[dummy(faker = "1..=28")]
    day: u32,
    #[dummy(faker = "1..=12")]
    month: u32,
    #[dummy(faker = "0..=99")]
    year: u32,
    female: bool,
}

fn regions() -> RegionTable {
    RegionTable::from_json_str(REGIONS_JSON, false).expect("test dataset parses")
}

fn random_digits(len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + (0..10u8).fake::<u8>()))
        .collect()
}

#[test]
fn region_codes_reassemble_the_prefix() {
    for _ in 0..100 {
        let code = NikCode::new(&random_digits(16));
        let nik = Nik::new(&code, None, 2026);
        let joined = format!(
            "{}{}{}",
            nik.province_code(),
            nik.city_code(),
            nik.district_code()
        );
        assert_eq!(joined, &code.as_str()[..6]);
        assert_eq!(joined, nik.region());
    }
}

#[test]
fn gender_bias_is_removed_from_the_day() {
    for _ in 0..100 {
        let fields: BirthFields = Faker.fake();
        let raw_day = if fields.female {
            fields.day + 40
        } else {
            fields.day
        };
        let raw = format!(
            "{}{:02}{:02}{:02}{}",
            random_digits(6),
            raw_day,
            fields.month,
            fields.year,
            random_digits(4)
        );
        let code = NikCode::new(&raw);
        let nik = Nik::new(&code, None, 2026);

        let expected = if fields.female {
            Gender::Female
        } else {
            Gender::Male
        };
        assert_eq!(nik.gender_kind(), expected);
        assert_eq!(nik.birth_day(), format!("{:02}", fields.day));
        assert_eq!(nik.birth_month(), format!("{:02}", fields.month));

        let date = nik.birth_date_value().expect("day 1-28 always exists");
        let full_year: i32 = nik.full_year().parse().unwrap();
        assert_eq!(
            date,
            chrono::NaiveDate::from_ymd_opt(full_year, fields.month, fields.day).unwrap()
        );
    }
}

#[test]
fn validity_depends_only_on_length() {
    let mut parser = NikParser::default();
    assert!(parser.set_code("3175091234567890").is_valid());
    assert!(!parser.set_code("31750912").is_valid());
    assert!(!parser.set_code("31750912345678901").is_valid());
}

#[test]
fn sequence_number_ignores_whitespace() {
    let mut parser = NikParser::default();
    parser.set_code("317509123456 7890");
    assert_eq!(parser.decode().sequence_number(), "7890");
}

#[test]
fn unknown_province_keeps_its_code() {
    let mut parser = NikParser::with_regions(regions());
    let parsed = parser.parse("9971050101990001").unwrap();
    assert_eq!(parsed.region.province.code, "99");
    assert_eq!(parsed.region.province.name, None);
    assert_eq!(parsed.birth_city, None);
}

#[test]
fn century_straddles_the_reference_year() {
    let year = 2026;
    let this_year = (year % 100) as i64;
    assert_eq!(century_for(this_year, year), "20");
    assert_eq!(century_for(this_year + 1, year), "19");

    let code = NikCode::new("3171050101260001");
    assert_eq!(Nik::new(&code, None, 2026).full_year(), "2026");
    assert_eq!(Nik::new(&code, None, 2025).full_year(), "1926");
}

#[test]
fn end_to_end_parse() {
    let mut parser = NikParser::with_regions(regions());
    let parsed = parser.parse("3171050101990001").unwrap();

    assert!(parsed.valid);
    assert_eq!(parsed.nik, "3171050101990001");
    assert_eq!(parsed.region.province.name.as_deref(), Some("DKI Jakarta"));
    assert_eq!(parsed.gender, "Laki-Laki");
    assert_eq!(parser.decode().birth_day(), "01");
    assert_eq!(parsed.unique_code, "0001");
    assert_eq!(parsed.birth_date.as_deref(), Some("01-01-1999"));
    assert_eq!(parsed.birth_city.as_deref(), Some("Kota Adm. Jakarta Selatan"));
    assert_eq!(parsed.region.district.code, "317105");
    assert_eq!(parsed.region.district.name.as_deref(), Some("Kebayoran Lama"));
    assert_eq!(parsed.region.postal_code.code.as_deref(), Some("12240"));
}

#[test]
fn empty_code_is_ignored() {
    let mut parser = NikParser::with_regions(regions());
    let before = parser.parse("3171054101990001").unwrap();
    assert_eq!(before.gender, "Perempuan");

    let after = parser.parse("").unwrap();
    assert_eq!(after, before);
    assert_eq!(parser.code().as_str(), "3171054101990001");
}

#[test]
fn json_round_trips_into_the_result() {
    let mut parser = NikParser::with_regions(regions());
    parser.set_code("3171050101990001");
    let json = parser.to_json().unwrap();
    let decoded: nik_parser::ParsedNikDto = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, parser.to_result().unwrap());
}

#[test]
fn autoload_uses_configured_dataset() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(REGIONS_JSON.as_bytes())?;

    let config = NikConfig::default().with_region_data_path(file.path());
    let mut parser = NikParser::with_config(config, true)?;
    assert!(parser.is_region_loaded());

    let parsed = parser.parse("3273010101990001")?;
    assert_eq!(parsed.region.province.name.as_deref(), Some("Jawa Barat"));
    assert_eq!(parsed.region.city.name.as_deref(), Some("Kota Bandung"));
    assert_eq!(parsed.region.district.name, None);
    Ok(())
}

#[test]
fn autoload_fails_on_missing_dataset() {
    let config = NikConfig::default().with_region_data_path("/nonexistent/regions.json");
    let err = NikParser::with_config(config.clone(), true).unwrap_err();
    assert!(matches!(err, NikError::Io { .. }));

    // lazy loading surfaces the same error on first use
    let mut parser = NikParser::with_config(config, false).unwrap();
    parser.set_code("3171050101990001");
    assert_eq!(parser.decode().birth_day(), "01");
    assert!(matches!(parser.to_result(), Err(NikError::Io { .. })));
}

#[test]
fn bundled_dataset_resolves_jakarta() {
    let mut parser = NikParser::new(true).unwrap();
    let parsed = parser.parse("3175024512050002").unwrap();
    assert_eq!(parsed.region.province.name.as_deref(), Some("DKI Jakarta"));
    assert_eq!(parsed.region.city.name.as_deref(), Some("Kota Adm. Jakarta Utara"));
    assert_eq!(parsed.region.district.name.as_deref(), Some("Tanjung Priok"));
    assert_eq!(parsed.region.postal_code.code.as_deref(), Some("14310"));
    assert_eq!(parsed.gender, "Perempuan");
    assert_eq!(parsed.birth_date.as_deref(), Some("05-12-2005"));
}
