use std::time::Duration;

const UNITS: &[(&str, u128)] = &[
    ("d", 24 * 60 * 60 * 1000),
    ("h", 60 * 60 * 1000),
    ("m", 60 * 1000),
    ("s", 1000),
    ("ms", 1),
];

/// 경과 시간을 사람이 읽기 쉬운 형태로 변환
///
/// 0이 아닌 가장 큰 두 단위만 사용합니다 (예: 65초 → "1m5s", 0.5초 → "500ms").
/// 두 단위가 이웃할 필요는 없어서 3 600 500ms는 "1h500ms"가 되고, 주(week) 단위는
/// 없으므로 가장 큰 단위는 일(d)입니다.
pub fn human_duration(elapsed: Duration) -> String {
    let mut remaining = elapsed.as_millis();
    let mut parts = Vec::with_capacity(2);

    for (suffix, size) in UNITS {
        let count = remaining / size;
        remaining %= size;

        if count > 0 {
            parts.push(format!("{}{}", count, suffix));
            if parts.len() == 2 {
                break;
            }
        }
    }

    if parts.is_empty() {
        return "0ms".to_string();
    }
    parts.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(human_duration(ms(65_000)), "1m5s");
        assert_eq!(human_duration(ms(60_000)), "1m");
    }

    #[test]
    fn test_sub_second() {
        assert_eq!(human_duration(ms(500)), "500ms");
        assert_eq!(human_duration(ms(0)), "0ms");
        assert_eq!(human_duration(Duration::from_micros(900)), "0ms");
    }

    #[test]
    fn test_largest_two_units_only() {
        // 1d 1h 1m 1s
        assert_eq!(human_duration(ms(90_061_000)), "1d1h");
        // 1s 250ms
        assert_eq!(human_duration(ms(1_250)), "1s250ms");
        // 중간 단위가 0이면 다음 0이 아닌 단위 사용
        assert_eq!(human_duration(ms(3_600_500)), "1h500ms");
    }

    #[test]
    fn test_days_are_the_largest_unit() {
        // 15일 2시간
        assert_eq!(human_duration(ms(15 * 86_400_000 + 2 * 3_600_000)), "15d2h");
    }
}
