use crate::theme::Theme;
use crate::utils::*;
use revgrid_core as grid;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Fixed grid shapes offered by the settings dialog. The grid cannot change
/// shape at runtime; picking a preset rebuilds the widget from scratch.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum GridPreset {
    Ring,
    Full,
    Checker,
}

impl GridPreset {
    pub(crate) const ALL: &'static [(&'static str, GridPreset)] = &[
        ("Ring", GridPreset::Ring),
        ("Full", GridPreset::Full),
        ("Checker", GridPreset::Checker),
    ];

    pub(crate) fn layout(self) -> grid::GridLayout {
        use GridPreset::*;
        let rows = match self {
            // The classic demo shape: a 3x3 block with the middle-row sides
            // cut out, 7 active cells.
            Ring => vec![
                vec![true, true, true],
                vec![false, true, false],
                vec![true, true, true],
            ],
            Full => vec![vec![true; 4]; 4],
            Checker => (0..5)
                .map(|y| (0..5).map(|x| (x + y) % 2 == 0).collect())
                .collect(),
        };
        grid::GridLayout::from_rows(&rows).expect("preset shapes are well formed")
    }
}

impl Default for GridPreset {
    fn default() -> Self {
        Self::Ring
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub preset: GridPreset,
    pub tick_ms: u32,
}

impl Settings {
    pub(crate) const DEFAULT_TICK_MS: u32 = 250;

    /// The replay interval must be a positive number of milliseconds.
    pub(crate) fn sanitized(self) -> Self {
        Self {
            tick_ms: self.tick_ms.max(1),
            ..self
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: GridPreset::default(),
            tick_ms: Self::DEFAULT_TICK_MS,
        }
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "revgrid:settings:v1";
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub onupdate: Callback<Settings>,
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let preset_item = |label: &'static str, preset: GridPreset| {
        let onupdate = props.onupdate.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            let settings = Settings {
                preset,
                ..LocalOrDefault::local_or_default()
            };
            settings.local_save();
            onupdate.emit(settings);
        });
        html! { <li><a href="#" {onclick}>{label}</a></li> }
    };

    let speed_item = |label: &'static str, tick_ms: u32| {
        let onupdate = props.onupdate.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            let settings = Settings {
                tick_ms,
                ..LocalOrDefault::local_or_default()
            }
            .sanitized();
            settings.local_save();
            onupdate.emit(settings);
        });
        html! { <li><a href="#" {onclick}>{label}</a></li> }
    };

    let theme_item = |label: &'static str, theme: Option<Theme>| {
        let onclick = Callback::from(move |_: MouseEvent| Theme::apply(theme));
        html! { <li><a href="#" {onclick}>{label}</a></li> }
    };

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{"Settings"}</h2>
                <h3>{"Grid"}</h3>
                <ul>
                    { for GridPreset::ALL.iter().map(|&(label, preset)| preset_item(label, preset)) }
                </ul>
                <h3>{"Replay speed"}</h3>
                <ul>
                    { speed_item("Slow", 500) }
                    { speed_item("Normal", Settings::DEFAULT_TICK_MS) }
                    { speed_item("Fast", 100) }
                </ul>
                <h3>{"Theme"}</h3>
                <ul>
                    { theme_item("Auto", None) }
                    { theme_item("Light", Some(Theme::Light)) }
                    { theme_item("Dark", Some(Theme::Dark)) }
                </ul>
            </article>
        </dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_matches_the_demo_grid() {
        let layout = GridPreset::default().layout();
        assert_eq!(layout.size(), (3, 3));
        assert_eq!(layout.active_count(), 7);
        assert!(!layout.is_active((0, 1)));
        assert!(!layout.is_active((2, 1)));
        assert!(layout.is_active((1, 1)));
    }

    #[test]
    fn checker_preset_alternates_cells() {
        let layout = GridPreset::Checker.layout();
        assert_eq!(layout.size(), (5, 5));
        assert_eq!(layout.active_count(), 13);
        assert!(layout.is_active((0, 0)));
        assert!(!layout.is_active((1, 0)));
    }

    #[test]
    fn sanitize_clamps_a_zero_interval() {
        let settings = Settings {
            tick_ms: 0,
            ..Default::default()
        };
        assert_eq!(settings.sanitized().tick_ms, 1);

        let settings = Settings::default();
        assert_eq!(settings.sanitized().tick_ms, Settings::DEFAULT_TICK_MS);
    }

    #[test]
    fn storage_key_uses_versioned_namespace() {
        assert_eq!(<Settings as StorageKey>::KEY, "revgrid:settings:v1");
    }
}
