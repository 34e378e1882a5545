use crate::constants::*;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike};
use hifitime::{Duration, Epoch};
use nalgebra as na;
use serde::Serialize;

/// Sun angles for one place and local clock time. All angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPosition {
    pub hour_angle_deg: f64,
    pub declination_deg: f64,
    pub elevation_deg: f64,
    pub zenith_deg: f64,
    pub azimuth_deg: f64, // Clockwise from north
    pub local_solar_time_hrs: f64,
    pub equation_of_time_min: f64,
    pub time_correction_min: f64,
}

/// Computes sun angles from day of year, local clock time and location.
///
/// Local solar time corrects the clock for the observer's offset from the
/// time zone meridian and for the equation of time; the hour angle is 15°
/// per hour from solar noon. Azimuth is measured from north and reflected
/// past 180° after solar noon. Non-finite values from degenerate geometry
/// (sun at the zenith) are returned as-is.
///
/// # Arguments
/// * `day_of_year` - 1 for January 1st
/// * `hour`, `minute` - local clock time
/// * `latitude_deg` - positive north
/// * `longitude_deg` - positive east
/// * `utc_offset_hrs` - local clock offset from UTC
pub fn solar_position(
    day_of_year: f64,
    hour: f64,
    minute: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    utc_offset_hrs: f64,
) -> SolarPosition {
    let local_meridian_deg = DEGREES_PER_HOUR * utc_offset_hrs;
    let b = (360.0 / DAYS_PER_YEAR * (day_of_year - EQUINOX_DAY_OFFSET)).to_radians();

    let equation_of_time = 9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin();
    let time_correction = 4.0 * (longitude_deg - local_meridian_deg) + equation_of_time;
    let local_solar_time = hour + minute / 60.0 + time_correction / 60.0;
    let hour_angle = DEGREES_PER_HOUR * (local_solar_time - 12.0);

    let declination = AXIAL_TILT_DEG * b.sin();

    let (lat, dec, ha) = (
        latitude_deg.to_radians(),
        declination.to_radians(),
        hour_angle.to_radians(),
    );
    let elevation = (dec.sin() * lat.sin() + dec.cos() * lat.cos() * ha.cos()).asin();

    let azimuth_morning = ((dec.sin() * lat.cos() - dec.cos() * lat.sin() * ha.cos())
        / elevation.cos())
    .acos()
    .to_degrees();
    let azimuth = if local_solar_time < 12.0 {
        azimuth_morning
    } else {
        360.0 - azimuth_morning
    };

    let elevation_deg = elevation.to_degrees();
    SolarPosition {
        hour_angle_deg: hour_angle,
        declination_deg: declination,
        elevation_deg,
        zenith_deg: 90.0 - elevation_deg,
        azimuth_deg: azimuth,
        local_solar_time_hrs: local_solar_time,
        equation_of_time_min: equation_of_time,
        time_correction_min: time_correction,
    }
}

impl SolarPosition {
    /// Sun position for a zoned civil time; the UTC offset comes from the timestamp.
    pub fn from_datetime(
        datetime: &DateTime<FixedOffset>,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Self {
        let utc_offset_hrs = datetime.offset().local_minus_utc() as f64 / 3600.0;
        let minute = datetime.minute() as f64 + datetime.second() as f64 / 60.0;
        solar_position(
            datetime.ordinal() as f64,
            datetime.hour() as f64,
            minute,
            latitude_deg,
            longitude_deg,
            utc_offset_hrs,
        )
    }

    /// Sun position at a UTC epoch, observed on a clock `utc_offset_hrs` from UTC.
    pub fn from_epoch(
        epoch: Epoch,
        utc_offset_hrs: f64,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Self {
        let local = epoch + Duration::from_seconds(utc_offset_hrs * 3600.0);
        let (year, month, day, hour, minute, second, _) = local.to_gregorian_utc();
        let day_of_year = NaiveDate::from_ymd_opt(year, month as u32, day as u32)
            .map(|date| date.ordinal() as f64)
            .unwrap_or(f64::NAN);

        solar_position(
            day_of_year,
            hour as f64,
            minute as f64 + second as f64 / 60.0,
            latitude_deg,
            longitude_deg,
            utc_offset_hrs,
        )
    }

    pub fn is_above_horizon(&self) -> bool {
        self.elevation_deg > 0.0
    }

    /// Unit vector towards the sun in the local East-North-Up frame.
    pub fn direction_enu(&self) -> na::Vector3<f64> {
        let el = self.elevation_deg.to_radians();
        let az = self.azimuth_deg.to_radians();
        na::Vector3::new(el.cos() * az.sin(), el.cos() * az.cos(), el.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use chrono::TimeZone;
    use test_case::test_case;

    // Day 81 has B = 0, so the equation of time is -7.53 min and the
    // declination is zero. On the zone meridian, clock 12:07.53 is solar noon.
    const EQUINOX_NOON_MINUTE: f64 = 7.53;

    #[test]
    fn test_hour_angle_zero_at_solar_noon() {
        let pos = solar_position(81.0, 12.0, EQUINOX_NOON_MINUTE, 40.0, 15.0, 1.0);
        assert_abs_diff_eq!(pos.local_solar_time_hrs, 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pos.hour_angle_deg, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.declination_deg, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pos.elevation_deg, 50.0, epsilon = 1e-9);
    }

    #[test_case(172.0, 23.45; "june solstice")]
    #[test_case(355.0, -23.45; "december solstice")]
    fn test_declination_extremes(day: f64, expected: f64) {
        let pos = solar_position(day, 12.0, 0.0, 0.0, 0.0, 0.0);
        assert_abs_diff_eq!(pos.declination_deg, expected, epsilon = 0.05);
    }

    #[test]
    fn test_zenith_complements_elevation() {
        let pos = solar_position(200.0, 9.0, 30.0, 52.0, 4.9, 2.0);
        assert_relative_eq!(pos.zenith_deg + pos.elevation_deg, 90.0, max_relative = 1e-12);
    }

    #[test]
    fn test_morning_and_afternoon_azimuth_are_mirrored() {
        let noon = 12.0 + EQUINOX_NOON_MINUTE / 60.0;
        let morning = solar_position(81.0, noon - 2.0, 0.0, 40.0, 15.0, 1.0);
        let afternoon = solar_position(81.0, noon + 2.0, 0.0, 40.0, 15.0, 1.0);

        assert!(morning.azimuth_deg < 180.0);
        assert!(afternoon.azimuth_deg > 180.0);
        assert_abs_diff_eq!(morning.azimuth_deg + afternoon.azimuth_deg, 360.0, epsilon = 1e-9);
        assert_abs_diff_eq!(morning.elevation_deg, afternoon.elevation_deg, epsilon = 1e-9);
    }

    #[test]
    fn test_sun_below_horizon_at_midnight() {
        let pos = solar_position(172.0, 0.0, 0.0, 48.0, 2.35, 2.0);
        assert!(!pos.is_above_horizon());
    }

    #[test]
    fn test_direction_is_unit_vector() {
        let pos = solar_position(100.0, 15.0, 0.0, -33.9, 151.2, 10.0);
        let dir = pos.direction_enu();
        assert_relative_eq!(dir.magnitude(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(dir.z, pos.elevation_deg.to_radians().sin(), max_relative = 1e-12);
    }

    #[test]
    fn test_sun_overhead_at_equator_on_equinox() {
        let pos = solar_position(81.0, 12.0, EQUINOX_NOON_MINUTE, 0.0, 15.0, 1.0);
        assert_abs_diff_eq!(pos.elevation_deg, 90.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.zenith_deg, 0.0, epsilon = 1e-6);
        // On the equator the azimuth numerator vanishes, so acos(0) is kept
        // and the afternoon branch reflects it.
        assert_abs_diff_eq!(pos.azimuth_deg, 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_azimuth_is_undefined_at_the_zenith() {
        // cos(latitude) rounds to exactly 1, so the elevation is exactly 90°
        // and the azimuth cosine divides a nonzero value by cos(90°).
        let pos = solar_position(81.0, 12.0, EQUINOX_NOON_MINUTE, 1e-7, 15.0, 1.0);
        assert_eq!(pos.elevation_deg, 90.0);
        assert!(pos.azimuth_deg.is_nan());
        assert!(pos.direction_enu().x.is_nan());
    }

    #[test]
    fn test_datetime_and_epoch_agree() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2024, 6, 21, 14, 30, 0).unwrap();
        let from_chrono = SolarPosition::from_datetime(&local, 52.52, 13.40);

        let epoch = Epoch::from_gregorian_utc(2024, 6, 21, 12, 30, 0, 0);
        let from_hifitime = SolarPosition::from_epoch(epoch, 2.0, 52.52, 13.40);

        assert_abs_diff_eq!(from_chrono.azimuth_deg, from_hifitime.azimuth_deg, epsilon = 1e-6);
        assert_abs_diff_eq!(
            from_chrono.elevation_deg,
            from_hifitime.elevation_deg,
            epsilon = 1e-6
        );
        assert!(from_chrono.is_above_horizon());
    }
}
