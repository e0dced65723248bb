/// 삭제 대상 스냅샷 하나
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    /// 인스턴스 이름, 짧은 ID 또는 UUID
    pub container: String,
    /// 스냅샷 이름
    pub name: String,
}

impl Target {
    pub fn new(container: &str, name: &str) -> Self {
        Self {
            container: container.to_string(),
            name: name.to_string(),
        }
    }
}

/// 삭제 후 대기 방식 (`-w` 반복 횟수로 결정)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitSpec {
    /// 기다리지 않음
    NoWait,
    /// 조용히 기다림
    Plain,
    /// 진행 표시기를 띄우고 기다림 (세기 >= 2)
    Indicated(u32),
}

impl WaitSpec {
    /// `-w` 횟수: 0 → NoWait, 1 → Plain, n → Indicated(n)
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => WaitSpec::NoWait,
            1 => WaitSpec::Plain,
            n => WaitSpec::Indicated(u32::from(n)),
        }
    }

    pub fn is_waiting(&self) -> bool {
        !matches!(self, WaitSpec::NoWait)
    }

    /// 표시기를 띄울 경우 그 세기. 터미널이 아니면 항상 None
    pub fn indicator_intensity(&self, can_show_indicator: bool) -> Option<u32> {
        match self {
            WaitSpec::Indicated(intensity) if can_show_indicator => Some(*intensity),
            _ => None,
        }
    }
}

/// 한 번의 확인으로 처리할 삭제 계획
#[derive(Debug, Clone)]
pub struct DeletePlan {
    pub targets: Vec<Target>,
    pub wait: WaitSpec,
    /// 확인 없이 진행
    pub force: bool,
}

impl DeletePlan {
    pub fn new(container: &str, names: &[String], wait: WaitSpec, force: bool) -> Self {
        Self {
            targets: names.iter().map(|name| Target::new(container, name)).collect(),
            wait,
            force,
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.targets.iter().map(|t| t.name.clone()).collect()
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_spec_from_count() {
        assert_eq!(WaitSpec::from_count(0), WaitSpec::NoWait);
        assert_eq!(WaitSpec::from_count(1), WaitSpec::Plain);
        assert_eq!(WaitSpec::from_count(2), WaitSpec::Indicated(2));
        assert_eq!(WaitSpec::from_count(5), WaitSpec::Indicated(5));
    }

    #[test]
    fn test_indicator_needs_terminal() {
        assert_eq!(WaitSpec::Indicated(3).indicator_intensity(true), Some(3));
        assert_eq!(WaitSpec::Indicated(3).indicator_intensity(false), None);
        assert_eq!(WaitSpec::Plain.indicator_intensity(true), None);
        assert!(!WaitSpec::NoWait.is_waiting());
        assert!(WaitSpec::Plain.is_waiting());
    }

    #[test]
    fn test_plan_keeps_input_order() {
        let names = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let plan = DeletePlan::new("web-01", &names, WaitSpec::NoWait, false);

        assert_eq!(plan.target_count(), 3);
        assert_eq!(plan.names(), names);
        assert!(plan.targets.iter().all(|t| t.container == "web-01"));
    }
}
