//! Colour palettes and the app stylesheet.
//!
//! The palettes become CSS custom properties; the dark one applies when the
//! system prefers a dark colour scheme.

/// Named colours used across the views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Palette {
    text: &'static str,
    sub_text: &'static str,
    background: &'static str,
    card: &'static str,
    border: &'static str,
    tab_icon_default: &'static str,
    success: &'static str,
    warning: &'static str,
    error: &'static str,
    primary_light: &'static str,
    primary: &'static str,
    primary_dark: &'static str,
    accent: &'static str,
    accent_light: &'static str,
}

const LIGHT: Palette = Palette {
    text: "#1F2937",
    sub_text: "#4B5563",
    background: "#FFFFFF",
    card: "#FFFFFF",
    border: "#E5E7EB",
    tab_icon_default: "#9CA3AF",
    success: "#10B981",
    warning: "#F59E0B",
    error: "#EF4444",
    primary_light: "#DBEAFE",
    primary: "#3B82F6",
    primary_dark: "#2563EB",
    accent: "#F97316",
    accent_light: "#FFEDD5",
};

const DARK: Palette = Palette {
    text: "#F9FAFB",
    sub_text: "#D1D5DB",
    background: "#111827",
    card: "#1F2937",
    border: "#374151",
    tab_icon_default: "#6B7280",
    success: "#10B981",
    warning: "#F59E0B",
    error: "#EF4444",
    primary_light: "#2563EB",
    primary: "#60A5FA",
    primary_dark: "#93C5FD",
    accent: "#F97316",
    accent_light: "#FDBA74",
};

impl Palette {
    fn css_variables(&self) -> String {
        [
            ("text", self.text),
            ("sub-text", self.sub_text),
            ("background", self.background),
            ("card", self.card),
            ("border", self.border),
            ("tab-icon-default", self.tab_icon_default),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
            ("primary-light", self.primary_light),
            ("primary", self.primary),
            ("primary-dark", self.primary_dark),
            ("accent", self.accent),
            ("accent-light", self.accent_light),
        ]
        .iter()
        .map(|(name, value)| format!("--{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

const RULES: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    background: var(--background);
    color: var(--text);
    font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
}
.screen { display: flex; flex-direction: column; min-height: 100vh; padding-bottom: 72px; }
.screen-header { display: flex; justify-content: space-between; align-items: center; padding: 12px 20px 16px; }
.screen-title { font-size: 24px; font-weight: 700; margin: 0; }
.subtitle { color: var(--sub-text); font-size: 16px; margin: 4px 0 0; }
.section-title { font-size: 18px; font-weight: 600; margin: 0 0 16px; }
.content { padding: 0 20px 20px; }
.muted { color: var(--sub-text); }
.row { display: flex; flex-direction: row; align-items: center; gap: 8px; }
.wrap { flex-wrap: wrap; }

.btn { border-radius: 8px; border: 1px solid var(--primary); cursor: pointer; font-weight: 600; }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: var(--primary); color: white; }
.btn-outline { background: transparent; color: var(--primary); }
.btn-secondary { background: var(--primary-light); color: var(--primary); border-color: var(--primary-light); }
.btn-sm { padding: 6px 12px; font-size: 14px; }
.btn-md { padding: 10px 16px; font-size: 16px; }
.btn-lg { padding: 14px 20px; font-size: 18px; width: 100%; }
.icon-btn { background: none; border: none; color: var(--text); cursor: pointer; padding: 4px; }

.badge { display: inline-block; border-radius: 12px; font-weight: 600; padding: 4px 10px; font-size: 12px; }
.badge-small { padding: 2px 8px; font-size: 11px; }
.badge-success { background: var(--success); color: white; }
.badge-warning { background: var(--warning); color: white; }
.badge-neutral { background: var(--border); color: var(--text); }

.skill-tag { display: inline-flex; align-items: center; gap: 4px; border-radius: 16px; padding: 6px 12px; font-size: 14px; margin: 0 8px 8px 0; border: none; }
.skill-tag-small { padding: 4px 8px; font-size: 12px; }
.skill-beginner { background: var(--primary-light); color: var(--primary); }
.skill-intermediate { background: var(--primary); color: white; }
.skill-expert { background: var(--primary-dark); color: white; }
.skill-tag-selected { outline: 2px solid var(--accent); }

.avatar { position: relative; border-radius: 50%; background: var(--primary-light); color: var(--primary); display: inline-flex; align-items: center; justify-content: center; font-weight: 600; flex-shrink: 0; }
.avatar img { width: 100%; height: 100%; border-radius: 50%; object-fit: cover; }
.avatar-sm { width: 32px; height: 32px; font-size: 13px; }
.avatar-md { width: 48px; height: 48px; font-size: 19px; }
.avatar-lg { width: 64px; height: 64px; font-size: 26px; }
.avatar-xl { width: 96px; height: 96px; font-size: 38px; }
.avatar-verified { position: absolute; right: -2px; bottom: -2px; color: var(--success); background: var(--card); border-radius: 50%; }

.card { background: var(--card); border: 1px solid var(--border); border-radius: 12px; padding: 16px; margin-bottom: 16px; cursor: pointer; }
.card-unread { background: var(--primary-light); }
.card-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px; }
.card-title { font-size: 18px; font-weight: 600; margin: 0 0 8px; }
.card-description { color: var(--sub-text); margin: 0 0 12px; display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden; }
.meta { display: flex; flex-wrap: wrap; gap: 16px; color: var(--sub-text); font-size: 14px; margin-bottom: 12px; }
.meta-item { display: inline-flex; align-items: center; gap: 4px; }
.message-preview { white-space: nowrap; overflow: hidden; text-overflow: ellipsis; margin: 4px 0 0; }
.unread-count { background: var(--primary); color: white; border-radius: 10px; min-width: 20px; padding: 0 6px; font-size: 12px; text-align: center; }

.search-box { display: flex; align-items: center; gap: 8px; margin: 0 20px 16px; padding: 10px 14px; border: 1px solid var(--border); border-radius: 10px; background: var(--card); }
.search-box input { flex: 1; border: none; outline: none; background: transparent; color: var(--text); font-size: 16px; }
.divider { width: 1px; height: 20px; background: var(--border); }

.auth { padding: 32px 24px; max-width: 420px; margin: 0 auto; }
.auth-hero { width: 100%; height: 180px; object-fit: cover; border-radius: 16px; margin-bottom: 24px; }
.field { display: flex; align-items: center; gap: 10px; border: 1px solid var(--border); border-radius: 10px; background: var(--card); padding: 12px 14px; margin-bottom: 14px; }
.field input, .field textarea { flex: 1; border: none; outline: none; background: transparent; color: var(--text); font-size: 16px; }
.form-label { display: block; font-weight: 600; margin-bottom: 6px; }
.error-box { background: color-mix(in srgb, var(--error) 12%, transparent); color: var(--error); padding: 12px; border-radius: 8px; margin-bottom: 16px; }
.success-box { background: color-mix(in srgb, var(--success) 12%, transparent); color: var(--success); padding: 12px; border-radius: 8px; margin-bottom: 16px; }
.link { color: var(--primary); cursor: pointer; background: none; border: none; font-weight: 600; font-size: inherit; }

.empty { text-align: center; padding: 48px 20px; }
.tabs { display: flex; border-bottom: 1px solid var(--border); margin-bottom: 16px; }
.tab { flex: 1; padding: 12px; text-align: center; background: none; border: none; border-bottom: 2px solid transparent; color: var(--sub-text); cursor: pointer; font-weight: 600; }
.tab-active { color: var(--primary); border-bottom-color: var(--primary); }
.profile-header { display: flex; flex-direction: column; align-items: center; gap: 6px; margin: 0 20px 24px; padding: 24px; border: 1px solid var(--border); border-radius: 16px; background: var(--card); }
.portfolio-image { width: 100%; height: 160px; object-fit: cover; border-radius: 8px; margin-bottom: 8px; }

.tab-bar { position: fixed; left: 0; right: 0; bottom: 0; display: flex; justify-content: space-around; padding: 8px 0 12px; background: var(--card); border-top: 1px solid var(--border); }
.tab-bar a { display: flex; flex-direction: column; align-items: center; gap: 2px; font-size: 11px; color: var(--tab-icon-default); text-decoration: none; }
.tab-bar a.active { color: var(--primary); }
.loading { display: flex; align-items: center; justify-content: center; min-height: 100vh; color: var(--sub-text); }
"#;

/// The full stylesheet: palette variables plus component rules.
pub fn stylesheet() -> String {
    format!(
        ":root {{ {} }}\n@media (prefers-color-scheme: dark) {{ :root {{ {} }} }}\n{}",
        LIGHT.css_variables(),
        DARK.css_variables(),
        RULES
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_declares_both_palettes() {
        let css = stylesheet();
        assert!(css.contains("--primary: #3B82F6;"));
        assert!(css.contains("--primary: #60A5FA;"));
        assert!(css.contains("prefers-color-scheme: dark"));
        assert!(css.contains(".tab-bar"));
    }
}
