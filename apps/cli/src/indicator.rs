use wtf_bank_gateway::{Mode, ModeInfo};

/// Never claims LIVE while mock data is being served.
pub fn label(info: &ModeInfo) -> &'static str {
    match info.mode {
        Mode::ForcedMock => "MOCK DATA (forced)",
        Mode::LiveUnavailable => "MOCK DATA (backend unavailable)",
        Mode::LiveAvailable => "LIVE",
        Mode::LiveUnknown => "CHECKING",
    }
}

pub fn render(info: &ModeInfo) -> String {
    let backend = match info.backend_available {
        Some(true) => "up",
        Some(false) => "down",
        None => "unknown",
    };

    format!(
        "[{}] mode={} forced={} backend={}",
        label(info),
        info.mode,
        info.forced_mock,
        backend
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let cases = [
            (Mode::ForcedMock, true, Some(true), "MOCK DATA (forced)"),
            (Mode::LiveUnavailable, false, Some(false), "MOCK DATA (backend unavailable)"),
            (Mode::LiveAvailable, false, Some(true), "LIVE"),
            (Mode::LiveUnknown, false, None, "CHECKING"),
        ];

        for (mode, forced_mock, backend_available, expected) in cases {
            let info = ModeInfo {
                mode,
                forced_mock,
                backend_available,
            };
            assert_eq!(label(&info), expected, "{mode}");
            assert_eq!(label(&info).starts_with("MOCK"), info.is_serving_mock());
        }
    }

    #[test]
    fn render_line() {
        let info = ModeInfo {
            mode: Mode::ForcedMock,
            forced_mock: true,
            backend_available: None,
        };
        assert_eq!(
            render(&info),
            "[MOCK DATA (forced)] mode=forced-mock forced=true backend=unknown"
        );
    }
}
