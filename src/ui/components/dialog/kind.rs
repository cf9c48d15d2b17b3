use super::text_field::TextField;
use crate::ui::Theme;
use ratatui::style::Color;

/// 입력값이 비어 있을 때 표시하는 검증 메시지
pub const INPUT_ERROR_MESSAGE: &str = "Please check your input";
/// 두 버튼 다이얼로그 기본 제목
pub const DEFAULT_EXIT_TITLE: &str = "Exit app";
/// 두 버튼 다이얼로그 기본 메시지
pub const DEFAULT_EXIT_MESSAGE: &str = "Do you want to exit the app?";

/// 메시지 다이얼로그 강조 종류 (테두리 색상)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTone {
    Info,
    Error,
    Hint,
    Success,
    /// 일반 다이얼로그 (회색)
    Neutral,
}

impl DialogTone {
    /// 이름 있는 변형의 고정 제목
    pub fn title(&self) -> Option<&'static str> {
        match self {
            DialogTone::Info => Some("Info"),
            DialogTone::Error => Some("Error"),
            DialogTone::Hint => Some("Hint"),
            DialogTone::Success => Some("Success"),
            DialogTone::Neutral => None,
        }
    }

    /// 테마에서 테두리 색상 조회
    pub fn border_color(&self, theme: &Theme) -> Color {
        match self {
            DialogTone::Info => theme.info.to_color(),
            DialogTone::Error => theme.error.to_color(),
            DialogTone::Hint => theme.warning.to_color(),
            DialogTone::Success => theme.success.to_color(),
            DialogTone::Neutral => theme.neutral.to_color(),
        }
    }
}

/// 입력 종류 힌트
///
/// 허용 문자를 제한하고, `Password`는 입력값을 가려서 표시한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardType {
    #[default]
    Text,
    /// 숫자만
    Number,
    /// 숫자 + 소수점 하나 + 선행 부호
    Decimal,
    /// 숫자, 공백, `+-()#*`
    Phone,
    /// 공백 제외
    Email,
    Password,
}

impl KeyboardType {
    /// 현재 값에 `c`를 삽입할 수 있는지
    pub fn accepts(&self, c: char, current: &str) -> bool {
        if c.is_control() {
            return false;
        }
        match self {
            KeyboardType::Text | KeyboardType::Password => true,
            KeyboardType::Number => c.is_ascii_digit(),
            KeyboardType::Decimal => {
                c.is_ascii_digit()
                    || (c == '.' && !current.contains('.'))
                    || (c == '-' && current.is_empty())
            }
            KeyboardType::Phone => {
                c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '#' | '*')
            }
            KeyboardType::Email => !c.is_whitespace(),
        }
    }

    pub fn is_masked(&self) -> bool {
        matches!(self, KeyboardType::Password)
    }
}

/// 다이얼로그 종류
///
/// 표시 중인 다이얼로그의 내용과 일시적인 상태(입력값, 검증 메시지,
/// 선택된 버튼)를 함께 가진다. 호스트가 다이얼로그를 띄울 때마다 새로 만든다.
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// 메시지 다이얼로그 (OK 버튼 하나)
    Message {
        title: Option<String>,
        message: String,
        tone: DialogTone,
    },
    /// 임의 내용 다이얼로그 (본문은 렌더링 시 위젯으로 전달)
    Content {
        title: Option<String>,
        body_height: u16,
    },
    /// 한 줄 텍스트 입력 다이얼로그
    TextInput {
        title: Option<String>,
        input_hint: String,
        keyboard: KeyboardType,
        field: TextField,
        error: Option<String>,
        /// 닫기 요청(Esc, 바깥 클릭)을 호스트에 전달할지
        dismissible: bool,
    },
    /// 두 버튼 확인 다이얼로그
    TwoButton {
        title: String,
        message: String,
        left_label: String,
        right_label: String,
        selected_button: usize, // 0: left, 1: right
    },
}

impl DialogKind {
    /// 표시할 제목 (공백뿐인 제목은 없는 것으로 취급)
    pub fn title(&self) -> Option<&str> {
        let title = match self {
            DialogKind::Message { title, .. }
            | DialogKind::Content { title, .. }
            | DialogKind::TextInput { title, .. } => title.as_deref(),
            DialogKind::TwoButton { title, .. } => Some(title.as_str()),
        };
        title.filter(|t| !t.trim().is_empty())
    }

    /// 텍스트 입력 다이얼로그의 현재 입력값
    pub fn input_value(&self) -> Option<&str> {
        match self {
            DialogKind::TextInput { field, .. } => Some(field.value()),
            _ => None,
        }
    }

    /// 텍스트 입력 다이얼로그의 검증 메시지
    pub fn validation_error(&self) -> Option<&str> {
        match self {
            DialogKind::TextInput { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}

/// 다이얼로그 상호작용 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    /// OK 버튼 (메시지/내용 다이얼로그)
    Ok,
    /// 입력 완료 (검증 통과한 입력값)
    Finished(String),
    /// 확인 없이 닫기 요청 (닫기 가능한 입력 다이얼로그만)
    Dismissed,
    /// 왼쪽 버튼
    Left,
    /// 오른쪽 버튼
    Right,
}

/// 다이얼로그 버튼 식별자 (마우스 판정용)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Ok,
    Left,
    Right,
}
