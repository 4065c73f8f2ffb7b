// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Skema-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Skema and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

fn footer_line(app: &App, now: Instant) -> Line<'static> {
    let theme = &app.theme;
    let mut spans = Vec::<Span<'static>>::new();

    if !app.fullscreen {
        spans.push(Span::styled(FULLSCREEN_PROMPT.to_owned(), theme.prompt_style()));
    }

    let updated = app.updated_at.map_or_else(|| "--:--".to_owned(), |minute| minute.to_string());
    push_footer_entry(&mut spans, theme, "UPDATED", &updated);
    push_footer_entry(&mut spans, theme, "REFRESH", "r");
    push_footer_entry_maybe_disabled(
        &mut spans,
        theme,
        "AUTO",
        if app.autoscroll.is_animating() { "on" } else { "idle" },
        !app.options.autoscroll,
    );
    push_footer_entry(&mut spans, theme, "SCROLL", "↑↓");
    push_footer_entry(&mut spans, theme, "QUIT", "q");

    if let Some(toast) = app.toast.as_ref().filter(|toast| now < toast.expires_at) {
        spans.push(Span::styled(" | ".to_owned(), theme.footer_label_style()));
        spans.push(Span::styled(toast.message.clone(), theme.error_style()));
    }

    Line::from(spans)
}

fn footer_brand_line(theme: &TuiTheme) -> Line<'static> {
    Line::from(vec![Span::styled(FOOTER_BRAND.to_owned(), theme.footer_label_style())])
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, theme: &TuiTheme, label: &str, value: &str) {
    push_footer_entry_maybe_disabled(spans, theme, label, value, false);
}

fn push_footer_entry_maybe_disabled(
    spans: &mut Vec<Span<'static>>,
    theme: &TuiTheme,
    label: &str,
    value: &str,
    disabled: bool,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ".to_owned(), theme.footer_label_style()));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        theme.footer_label_style(),
    ));
    let value_style = if disabled {
        theme.footer_label_style().add_modifier(Modifier::DIM)
    } else {
        theme.footer_value_style()
    };
    spans.push(Span::styled(value.to_owned(), value_style));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
