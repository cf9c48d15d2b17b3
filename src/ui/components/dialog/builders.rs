use super::{
    DialogKind, DialogTone, KeyboardType, TextField, DEFAULT_EXIT_MESSAGE, DEFAULT_EXIT_TITLE,
};

impl DialogKind {
    /// 메시지 다이얼로그 공통 생성
    pub fn message(title: Option<String>, message: impl Into<String>, tone: DialogTone) -> Self {
        DialogKind::Message {
            title,
            message: message.into(),
            tone,
        }
    }

    fn toned(tone: DialogTone, message: impl Into<String>) -> Self {
        Self::message(tone.title().map(str::to_string), message, tone)
    }

    /// 정보 다이얼로그 (파란 테두리)
    pub fn info(message: impl Into<String>) -> Self {
        Self::toned(DialogTone::Info, message)
    }

    /// 에러 다이얼로그 (빨간 테두리)
    pub fn error(message: impl Into<String>) -> Self {
        Self::toned(DialogTone::Error, message)
    }

    /// 힌트 다이얼로그 (노란 테두리)
    pub fn hint(message: impl Into<String>) -> Self {
        Self::toned(DialogTone::Hint, message)
    }

    /// 성공 다이얼로그 (초록 테두리)
    pub fn success(message: impl Into<String>) -> Self {
        Self::toned(DialogTone::Success, message)
    }

    /// 일반 다이얼로그 (회색 테두리, 제목 선택)
    pub fn generic(title: Option<&str>, message: impl Into<String>) -> Self {
        Self::message(title.map(str::to_string), message, DialogTone::Neutral)
    }

    /// 임의 내용 다이얼로그
    ///
    /// 본문 위젯은 `Dialog::content`로 렌더링 시 전달한다.
    pub fn content(title: Option<&str>, body_height: u16) -> Self {
        DialogKind::Content {
            title: title.map(str::to_string),
            body_height,
        }
    }

    /// 한 줄 텍스트 입력 다이얼로그
    ///
    /// `dismissible`이 false면 Esc/바깥 클릭은 무시되고 OK로만 닫을 수 있다.
    pub fn text_input(
        title: Option<&str>,
        input_hint: impl Into<String>,
        keyboard: KeyboardType,
        dismissible: bool,
    ) -> Self {
        DialogKind::TextInput {
            title: title.map(str::to_string),
            input_hint: input_hint.into(),
            keyboard,
            field: TextField::new(),
            error: None,
            dismissible,
        }
    }

    /// 두 버튼 다이얼로그 (기본 제목/메시지: 앱 종료 확인)
    pub fn two_button(left_label: impl Into<String>, right_label: impl Into<String>) -> Self {
        Self::two_button_with(
            DEFAULT_EXIT_TITLE,
            DEFAULT_EXIT_MESSAGE,
            left_label,
            right_label,
        )
    }

    /// 두 버튼 다이얼로그 (제목/메시지 지정)
    pub fn two_button_with(
        title: impl Into<String>,
        message: impl Into<String>,
        left_label: impl Into<String>,
        right_label: impl Into<String>,
    ) -> Self {
        DialogKind::TwoButton {
            title: title.into(),
            message: message.into(),
            left_label: left_label.into(),
            right_label: right_label.into(),
            selected_button: 0,
        }
    }
}
