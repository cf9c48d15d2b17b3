//! 다이얼로그 시스템
//!
//! 메시지(정보/에러/힌트/성공/일반), 임의 내용, 텍스트 입력, 두 버튼 다이얼로그.
//! 상태는 `DialogKind`에, 그리기는 `Dialog` 위젯에 있고
//! 키/마우스 처리 결과는 `DialogResult`로 호스트에 전달된다.

mod builders;
mod handler;
mod kind;
mod render;
mod text_field;

pub use kind::{
    DialogButton, DialogKind, DialogResult, DialogTone, KeyboardType, DEFAULT_EXIT_MESSAGE,
    DEFAULT_EXIT_TITLE, INPUT_ERROR_MESSAGE,
};
pub use render::{dialog_layout, Dialog, DialogLayout};
pub use text_field::TextField;
