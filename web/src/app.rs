use clap::Args;
use trivito_core::{
    Board, BoardGenerator, Coord, Coord2, GameConfig, GameSession, RandomBoardGenerator, SetupError,
    SetupTicket,
};
use trivito_protocol::DEFAULT_API_BASE;
use wasm_bindgen_futures::spawn_local;
use web_time::Instant;
use yew::prelude::*;

use crate::source::{FetchError, HttpSource};
use crate::utils::js_random_seed;
use crate::view::BoardView;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random, each restart adds one to it
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Base URL of the trivia API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Number of categories on the board
    #[arg(long, default_value_t = GameConfig::DEFAULT_CATEGORIES)]
    pub categories: Coord,

    /// Number of clues per category
    #[arg(long, default_value_t = GameConfig::DEFAULT_CLUES_PER_CATEGORY)]
    pub clues: Coord,

    /// How many categories to fetch before picking from them
    #[arg(long, default_value_t = GameConfig::DEFAULT_CANDIDATE_POOL)]
    pub pool: u16,
}

impl GameProps {
    pub(crate) fn config(&self) -> GameConfig {
        GameConfig::new(self.categories, self.clues, self.pool)
    }

    fn seed_for(&self, restart: u32) -> u64 {
        self.seed
            .map_or_else(js_random_seed, |seed| seed.wrapping_add(restart.into()))
    }
}

pub(crate) enum Msg {
    Restart,
    BoardReady(SetupTicket, Result<Board, SetupError<FetchError>>),
    Select(Coord2),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    text: String,
    revealed: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        text,
        revealed,
        onclick,
    } = props.clone();

    let class = classes!("cell", revealed.then_some("open"));

    html! {
        <td {class} {onclick}>{text}</td>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    view: BoardView,
    source: HttpSource,
    config: GameConfig,
}

impl GameView {
    fn with_props(props: &GameProps) -> Self {
        Self {
            session: GameSession::new(),
            view: BoardView::default(),
            source: HttpSource::new(&props.api_base),
            config: props.config(),
        }
    }

    /// Takes the API base and board shape from new props, returns whether either differs from what the current board
    /// was set up with. A changed seed is picked up by the next restart.
    fn apply_props(&mut self, props: &GameProps) -> bool {
        let source = HttpSource::new(&props.api_base);
        let config = props.config();
        let changed = source != self.source || config != self.config;
        self.source = source;
        self.config = config;
        changed
    }

    fn start_setup(&mut self, ctx: &Context<Self>) {
        let ticket = self.session.begin_setup();
        let seed = ctx.props().seed_for(self.session.restarts());
        let generator = RandomBoardGenerator::new(seed, self.config);
        let source = self.source.clone();
        let link = ctx.link().clone();

        log::debug!("setup {:?} started, seed: {}", ticket, seed);
        spawn_local(async move {
            let started_at = Instant::now();
            let result = generator.generate(&source).await;
            log::debug!(
                "setup {:?} finished in {:?}",
                ticket,
                started_at.elapsed()
            );
            link.send_message(Msg::BoardReady(ticket, result));
        });
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Restart);
        Self::with_props(ctx.props())
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        if self.apply_props(ctx.props()) {
            log::info!("settings changed, restarting");
            ctx.link().send_message(Msg::Restart);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Restart => {
                self.start_setup(ctx);
                true
            }
            BoardReady(ticket, Ok(board)) => match self.session.install(ticket, board, &mut self.view) {
                Ok(()) => {
                    log::debug!("board ready: {:?}", self.session.board().map(Board::size));
                    true
                }
                Err(err) => {
                    log::debug!("board not installed: {}", err);
                    false
                }
            },
            BoardReady(ticket, Err(err)) => {
                if self.session.is_current(ticket) {
                    log::error!("Could not set up board: {}", err);
                } else {
                    log::debug!("stale setup {:?} failed: {}", ticket, err);
                }
                self.session.abandon(ticket);
                true
            }
            Select(coords) => {
                log::trace!("select cell: {:?}", coords);
                self.session.select(coords, &mut self.view).has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let (cols, rows) = self.view.size();
        let loading = self.session.is_setting_up();

        let cb_restart = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Restart
        });

        html! {
            <div class="trivito">
                <nav>
                    <button class={classes!("restart", loading.then_some("loading"))} onclick={cb_restart}>
                        { if loading { "Loading…" } else { "Restart" } }
                    </button>
                </nav>
                <table id="jeopardy" class={self.view.is_empty().then_some("empty")}>
                    <thead>
                        <tr>
                            { for self.view.titles().map(|title| html! { <th>{title.to_string()}</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for (0..rows).map(|y| html! {
                                <tr>
                                    {
                                        for (0..cols).map(|x| {
                                            let coords = (x, y);
                                            let text = self.view.text_at(coords).to_string();
                                            let revealed = self.view.is_revealed(coords);
                                            let onclick = ctx.link().callback(move |_: MouseEvent| Select(coords));
                                            html! {
                                                <CellView {text} {revealed} {onclick}/>
                                            }
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        }
    }
}
