// Dropdown indicator - 드롭다운 화살표 회전 애니메이션
//
// 각도 0°는 위쪽 화살표(열림), 180°는 아래쪽 화살표(닫힘)

use std::time::{Duration, Instant};

/// 열림 상태 각도
pub const OPEN_ANGLE: f32 = 0.0;
/// 닫힘 상태 각도
pub const CLOSED_ANGLE: f32 = 180.0;
/// 기본 회전 시간
pub const DEFAULT_ROTATION: Duration = Duration::from_millis(150);

/// 화살표 회전 애니메이션
///
/// 전환이 시작될 때의 현재 각도에서 목표 각도로 보간합니다.
/// 전환 도중 다시 전환되면 그 시점의 각도에서 이어서 회전합니다.
#[derive(Debug, Clone)]
pub struct IndicatorAnimation {
    from: f32,
    to: f32,
    started: Option<Instant>,
    duration: Duration,
}

impl IndicatorAnimation {
    pub fn new(angle: f32, duration: Duration) -> Self {
        Self {
            from: angle,
            to: angle,
            started: None,
            duration,
        }
    }

    /// 목표 각도로 회전 시작
    pub fn animate_to(&mut self, target: f32, now: Instant) {
        let current = self.angle_at(now);
        self.from = current;
        self.to = target;
        self.started = if self.duration.is_zero() || current == target {
            None
        } else {
            Some(now)
        };
    }

    /// 주어진 시점의 각도
    pub fn angle_at(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return self.to;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    /// 회전 중인지 확인
    pub fn is_running(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|started| now.saturating_duration_since(started) < self.duration)
    }

    /// 회전 시간 변경 (진행 중인 회전은 즉시 완료)
    pub fn set_duration(&mut self, duration: Duration) {
        self.settle();
        self.duration = duration;
    }

    /// 목표 각도로 즉시 고정
    pub fn settle(&mut self) {
        self.from = self.to;
        self.started = None;
    }
}

impl Default for IndicatorAnimation {
    fn default() -> Self {
        Self::new(CLOSED_ANGLE, DEFAULT_ROTATION)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// 각도에 해당하는 화살표 문자
pub fn glyph_for_angle(angle: f32) -> char {
    let angle = angle.rem_euclid(360.0);
    if !(45.0..315.0).contains(&angle) {
        '▲'
    } else if angle < 135.0 {
        '▶'
    } else if angle < 225.0 {
        '▼'
    } else {
        '◀'
    }
}
