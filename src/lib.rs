//! 터미널 UI 컴포넌트 모음
//!
//! - 제네릭 드롭다운 선택기 (`ui::components::dropdown`)
//! - 모달 다이얼로그 (`ui::components::dialog`)
//!
//! 컴포넌트는 표시 상태만 가지며, 선택 값과 다이얼로그 표시 여부는 호스트가 소유한다.

pub mod config;
pub mod logging;
pub mod ui;
pub mod utils;
