use crate::settings::{Settings, SettingsView};
use crate::utils::*;
use gloo::timers::callback::Interval;
use revgrid_core as grid;
use yew::prelude::*;

/// Render-facing projection of a single cell.
#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCellState {
    /// Permanently empty position, rendered as a blank space.
    Empty,
    /// Active cell waiting for a click.
    Idle,
    /// Active cell that has been clicked and not yet retracted.
    Marked,
}

fn cell_state_at(engine: &grid::ReplayEngine, coords: grid::Coord2) -> ViewCellState {
    if !engine.is_active(coords) {
        ViewCellState::Empty
    } else if engine.is_marked(coords) {
        ViewCellState::Marked
    } else {
        ViewCellState::Idle
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    x: grid::Coord,
    y: grid::Coord,
    cell_state: ViewCellState,
    #[prop_or_default]
    clickable: bool,
    callback: Callback<grid::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use ViewCellState::*;

    let CellProps {
        x,
        y,
        cell_state,
        clickable,
        callback,
    } = props.clone();

    let mut class = classes!(
        "cell",
        match cell_state {
            Empty => classes!("empty"),
            Idle => classes!(),
            Marked => classes!("marked"),
        }
    );
    if clickable {
        class.push("clickable");
    }

    // The activation signal is only wired while the cell accepts clicks.
    let onclick = clickable.then(|| {
        Callback::from(move |_: MouseEvent| {
            callback.emit((x, y));
            log::trace!("({}, {}) clicked", x, y);
        })
    });

    html! {
        <td {class} {onclick}/>
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellClicked(grid::Coord2),
    ReplayTick,
    NewGrid,
    ToggleSettings,
    UpdateSettings(Settings),
}

#[derive(Properties, Clone, Debug, PartialEq)]
pub(crate) struct GridProps {
    /// Replay interval override from the URL args, in milliseconds.
    #[prop_or_default]
    pub speed: Option<u32>,
}

#[derive(Debug)]
pub(crate) struct GridView {
    settings: Settings,
    engine: grid::ReplayEngine,
    settings_open: bool,
    replay_timer: Option<Interval>,
}

impl GridView {
    fn tick_ms(&self, ctx: &Context<Self>) -> u32 {
        ctx.props()
            .speed
            .unwrap_or(self.settings.tick_ms)
            .max(1)
    }

    /// Arm/cancel is a pure function of the mode, re-evaluated after every
    /// engine mutation. The core guarantees that replaying implies a
    /// non-empty click order, so the armed condition is just the mode itself.
    /// Dropping the `Interval` cancels it.
    fn sync_replay_timer(&mut self, ctx: &Context<Self>) {
        let should_run = self.engine.mode().is_replaying();
        match (&self.replay_timer, should_run) {
            (None, true) => {
                let link = ctx.link().clone();
                let tick_ms = self.tick_ms(ctx);
                log::debug!("arming replay timer at {}ms", tick_ms);
                self.replay_timer = Some(Interval::new(tick_ms, move || {
                    link.send_message(Msg::ReplayTick)
                }));
            }
            (Some(_), false) => {
                log::debug!("cancelling replay timer");
                self.replay_timer = None;
            }
            _ => {}
        }
    }

    fn mode_class(&self) -> Classes {
        classes!(match self.engine.mode() {
            grid::Mode::Forward => "forward",
            grid::Mode::Replaying => "replaying",
        })
    }
}

impl Component for GridView {
    type Message = Msg;
    type Properties = GridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        let settings = Settings::local_or_default().sanitized();
        Self {
            engine: grid::ReplayEngine::new(settings.preset.layout()),
            settings,
            settings_open: false,
            replay_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            CellClicked(coords) => {
                log::debug!("cell clicked: {:?}", coords);
                match self.engine.register_click(coords) {
                    Ok(outcome) => outcome.has_update(),
                    Err(err) => {
                        log::warn!("click at {:?} rejected: {}", coords, err);
                        false
                    }
                }
            }
            ReplayTick => self.engine.replay_tick().has_update(),
            NewGrid => {
                self.engine = grid::ReplayEngine::new(self.settings.preset.layout());
                true
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
            UpdateSettings(settings) => {
                let settings = settings.sanitized();
                if self.settings != settings {
                    let rebuild = self.settings.preset != settings.preset;
                    self.settings = settings;
                    self.settings.local_save();
                    if rebuild {
                        self.engine = grid::ReplayEngine::new(self.settings.preset.layout());
                    }
                    // Force a re-arm so a running replay picks up the new
                    // interval.
                    self.replay_timer = None;
                    true
                } else {
                    false
                }
            }
        };

        self.sync_replay_timer(ctx);
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let (cols, rows) = self.engine.size();
        let marked = format_for_counter(i32::from(self.engine.marked_count()));
        let remaining = format_for_counter(
            i32::from(self.engine.active_count()) - i32::from(self.engine.marked_count()),
        );
        let mode_class = self.mode_class();

        let cb_new_grid = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGrid
        });
        let cb_show_settings = ctx.link().callback(|_| ToggleSettings);
        let cb_settings = ctx.link().callback(UpdateSettings);

        html! {
            <div class="revgrid">
                <small onclick={cb_show_settings}>{"···"}</small>
                <nav>
                    <aside>{marked}</aside>
                    <span><button class={mode_class} onclick={cb_new_grid}/></span>
                    <aside>{remaining}</aside>
                </nav>
                <table class={self.engine.mode().is_forward().then_some("playable")}>
                    {
                        for (0..rows).map(|y| html! {
                            <tr>
                                {
                                    for (0..cols).map(|x| {
                                        let pos = (x, y);
                                        let cell_state = cell_state_at(&self.engine, pos);
                                        let clickable = self.engine.is_clickable(pos);
                                        let callback = ctx.link().callback(Msg::CellClicked);
                                        html! {
                                            <CellView {x} {y} {cell_state} {clickable} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <SettingsView open={self.settings_open} onupdate={cb_settings}/>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GridPreset;

    fn demo_engine() -> grid::ReplayEngine {
        grid::ReplayEngine::new(GridPreset::Ring.layout())
    }

    #[test]
    fn cell_projection_maps_empty_idle_and_marked() {
        let mut engine = demo_engine();
        engine.register_click((1, 1)).unwrap();

        assert_eq!(cell_state_at(&engine, (0, 1)), ViewCellState::Empty);
        assert_eq!(cell_state_at(&engine, (0, 0)), ViewCellState::Idle);
        assert_eq!(cell_state_at(&engine, (1, 1)), ViewCellState::Marked);
    }

    #[test]
    fn marked_cells_stay_marked_until_their_own_retraction() {
        let mut engine = demo_engine();
        let clicks = [(0, 0), (1, 0), (2, 0), (1, 1), (0, 2), (1, 2), (2, 2)];
        for coords in clicks {
            engine.register_click(coords).unwrap();
        }
        assert!(engine.mode().is_replaying());

        engine.replay_tick();
        assert_eq!(cell_state_at(&engine, (0, 0)), ViewCellState::Idle);
        assert_eq!(cell_state_at(&engine, (1, 0)), ViewCellState::Marked);

        // Nothing is clickable mid-replay, including retracted cells.
        assert!(!engine.is_clickable((0, 0)));
        assert!(!engine.is_clickable((1, 0)));
    }

    #[test]
    fn clickable_query_follows_mode_and_marks() {
        let mut engine = demo_engine();

        assert!(engine.is_clickable((0, 0)));
        assert!(!engine.is_clickable((0, 1)));

        engine.register_click((0, 0)).unwrap();
        assert!(!engine.is_clickable((0, 0)));
        assert!(engine.is_clickable((1, 0)));
    }
}
