//! 경계 상자 기반 지역 검사
//!
//! 지역은 위도/경도의 닫힌 구간으로 된 직사각형입니다. 국경 폴리곤이 아니므로
//! 상자 안이라도 다른 나라일 수 있고, 최종 판단은 역지오코딩 국가 코드가 합니다.

use crate::config::RegionConfig;

/// 설정된 경계 상자에 대한 포함 검사기
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionValidator {
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
}

impl RegionValidator {
    pub fn new(region: &RegionConfig) -> Self {
        Self {
            min_latitude: region.min_latitude,
            max_latitude: region.max_latitude,
            min_longitude: region.min_longitude,
            max_longitude: region.max_longitude,
        }
    }

    /// 두 좌표가 모두 닫힌 구간 안에 있으면 true
    ///
    /// NaN은 어떤 비교도 참이 아니므로 항상 false입니다.
    pub fn is_within_region(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&latitude)
            && (self.min_longitude..=self.max_longitude).contains(&longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn egypt() -> RegionValidator {
        RegionValidator {
            min_latitude: 22.0,
            max_latitude: 31.5,
            min_longitude: 24.7,
            max_longitude: 36.9,
        }
    }

    #[test]
    fn test_cairo_is_inside() {
        assert!(egypt().is_within_region(30.0444, 31.2357));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let validator = egypt();
        assert!(validator.is_within_region(22.0, 24.7));
        assert!(validator.is_within_region(31.5, 36.9));
        assert!(validator.is_within_region(22.0, 36.9));
        assert!(validator.is_within_region(31.5, 24.7));
    }

    #[test]
    fn test_outside_on_either_axis() {
        let validator = egypt();
        assert!(!validator.is_within_region(21.999, 30.0));
        assert!(!validator.is_within_region(31.501, 30.0));
        assert!(!validator.is_within_region(27.0, 24.699));
        assert!(!validator.is_within_region(27.0, 36.901));
        assert!(!validator.is_within_region(35.0, 40.0));
    }

    #[test]
    fn test_nan_is_outside() {
        let validator = egypt();
        assert!(!validator.is_within_region(f64::NAN, 30.0));
        assert!(!validator.is_within_region(27.0, f64::NAN));
    }

    #[test]
    fn test_built_from_config() {
        let region = crate::config::tests::load(&[
            ("ENVIRONMENT", "dev"),
            ("LOCATION_API_KEY", "key"),
            ("REGION_MIN_LAT", "0"),
            ("REGION_MAX_LAT", "1"),
            ("REGION_MIN_LON", "10"),
            ("REGION_MAX_LON", "11"),
        ])
        .unwrap()
        .region;
        let validator = RegionValidator::new(&region);

        assert!(validator.is_within_region(0.5, 10.5));
        assert!(!validator.is_within_region(30.0444, 31.2357));
    }
}
