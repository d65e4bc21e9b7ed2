// crates/regionmatch-core/src/format.rs
//! Display helpers shared by every front end.
use crate::model::{Field, LandUnit, Region};

/// Shown for the HDI sentinel.
pub const NOT_AVAILABLE: &str = "n/a";
/// Shown for GDP per capita when population is zero.
pub const UNAVAILABLE: &str = "unavailable";

/// Formats one stat of `region` with scaling and a unit suffix.
///
/// | field            | output                                   |
/// |------------------|------------------------------------------|
/// | `Gdp`            | billions of USD, one decimal, `b`        |
/// | `GdpPerCapita`   | thousands of USD, one decimal, `k`       |
/// | `Land`           | in `land_unit`; over 1000 → `k`          |
/// | `Population`     | over 500k → millions `m`, else `k`       |
/// | `Hdi`            | three decimals, `n/a` for the sentinel   |
pub fn format_stat(region: &Region, field: Field, land_unit: LandUnit) -> String {
    match field {
        Field::Gdp => format!("{:.1}b", region.gdp / 1000.0),
        Field::GdpPerCapita => match region.gdp_per_capita() {
            Some(pc) => format!("{:.1}k", pc * 1000.0),
            None => UNAVAILABLE.to_string(),
        },
        Field::Land => format_land(region.land_area, land_unit),
        Field::Population => format_population(region.population),
        Field::Hdi => match region.hdi() {
            Some(hdi) => format!("{hdi:.3}"),
            None => NOT_AVAILABLE.to_string(),
        },
    }
}

/// Formats an area given in square kilometres in the requested unit.
pub fn format_land(km2: f64, unit: LandUnit) -> String {
    let land = unit.from_km2(km2);
    if land > 1000.0 {
        format!("{:.0}k", land / 1000.0)
    } else {
        format!("{land:.0}")
    }
}

pub fn format_population(pop: f64) -> String {
    if pop > 500_000.0 {
        format!("{:.1}m", pop / 1_000_000.0)
    } else {
        format!("{:.0}k", pop / 1_000.0)
    }
}

/// Signed percentage change from `a` to `b`, one decimal.
///
/// Positive values carry a `+`. A zero or non-finite base gives `n/a`.
///
/// ```
/// use regionmatch_core::format::format_relative_delta;
///
/// assert_eq!(format_relative_delta(100.0, 150.0), "+50.0%");
/// assert_eq!(format_relative_delta(150.0, 100.0), "-33.3%");
/// ```
pub fn format_relative_delta(a: f64, b: f64) -> String {
    let pct = (b - a) * 100.0 / a;
    if a == 0.0 || !pct.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    if pct > 0.0 {
        format!("+{pct:.1}%")
    } else {
        format!("{pct:.1}%")
    }
}

/// Relative delta of two regions on one field, `n/a` if either side lacks it.
pub fn format_field_delta(source: &Region, other: &Region, field: Field) -> String {
    if !field.is_available(source) || !field.is_available(other) {
        return NOT_AVAILABLE.to_string();
    }
    format_relative_delta(field.value(source), field.value(other))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RegionGroup;

    fn germany() -> Region {
        Region::new(RegionGroup::Foreign, "Germany", 5013574.0, 357581.0, 84075074.0, 0.959)
    }

    #[test]
    fn gdp_in_billions_and_per_capita_in_thousands() {
        let de = germany();
        assert_eq!(format_stat(&de, Field::Gdp, LandUnit::Metric), "5013.6b");
        assert_eq!(format_stat(&de, Field::GdpPerCapita, LandUnit::Metric), "59.6k");
    }

    #[test]
    fn land_respects_display_unit() {
        let texas = Region::new(
            RegionGroup::Domestic,
            "Texas",
            2709393.0,
            676587.0,
            31290831.0,
            0.917,
        );
        assert_eq!(format_stat(&texas, Field::Land, LandUnit::Metric), "677k");
        assert_eq!(format_stat(&texas, Field::Land, LandUnit::Imperial), "261k");

        let monaco = Region::new(RegionGroup::Foreign, "Monaco", 9995.0, 2.0, 38341.0, 0.0);
        assert_eq!(format_stat(&monaco, Field::Land, LandUnit::Metric), "2");
        assert_eq!(format_stat(&monaco, Field::Land, LandUnit::Imperial), "1");
    }

    #[test]
    fn population_switches_scale_at_half_a_million() {
        assert_eq!(format_population(39_431_263.0), "39.4m");
        assert_eq!(format_population(38_341.0), "38k");
        assert_eq!(format_population(500_000.0), "500k");
    }

    #[test]
    fn hdi_sentinel_is_not_available() {
        let monaco = Region::new(RegionGroup::Foreign, "Monaco", 9995.0, 2.0, 38341.0, 0.0);
        assert_eq!(format_stat(&monaco, Field::Hdi, LandUnit::Metric), NOT_AVAILABLE);
        assert_eq!(format_stat(&germany(), Field::Hdi, LandUnit::Metric), "0.959");
    }

    #[test]
    fn zero_population_per_capita_is_unavailable() {
        let empty = Region::new(RegionGroup::Foreign, "Empty", 10.0, 1.0, 0.0, 0.5);
        assert_eq!(format_stat(&empty, Field::GdpPerCapita, LandUnit::Metric), UNAVAILABLE);
    }

    #[test]
    fn relative_delta_signs() {
        assert_eq!(format_relative_delta(100.0, 150.0), "+50.0%");
        assert_eq!(format_relative_delta(150.0, 100.0), "-33.3%");
        assert_eq!(format_relative_delta(100.0, 100.0), "0.0%");
        assert_eq!(format_relative_delta(0.0, 5.0), NOT_AVAILABLE);
    }

    #[test]
    fn field_delta_skips_missing_hdi() {
        let monaco = Region::new(RegionGroup::Foreign, "Monaco", 9995.0, 2.0, 38341.0, 0.0);
        assert_eq!(format_field_delta(&germany(), &monaco, Field::Hdi), NOT_AVAILABLE);
    }
}
