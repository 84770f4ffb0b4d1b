use crate::*;

/// Presentation side of the board. The session calls into it whenever what the player sees has to change.
pub trait BoardRenderer {
    /// Lays out a fresh grid: one column per category headed by its title, every cell showing a placeholder.
    fn build_board(&mut self, board: &Board);

    /// Replaces the displayed content of a single cell.
    fn update_cell(&mut self, coords: Coord2, text: &str);
}

/// Handle for one run of board setup. Only the most recently issued ticket can install its board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SetupTicket(u32);

/// The game being played: the current board, if any, and bookkeeping for restarts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameSession {
    board: Option<Board>,
    issued: u32,
    pending: Option<SetupTicket>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn is_setting_up(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of setups started so far.
    pub fn restarts(&self) -> u32 {
        self.issued
    }

    /// Starts a new setup, superseding any setup still in flight.
    pub fn begin_setup(&mut self) -> SetupTicket {
        self.issued = self.issued.wrapping_add(1);
        let ticket = SetupTicket(self.issued);
        if let Some(previous) = self.pending.replace(ticket) {
            log::debug!("setup {:?} superseded by {:?}", previous, ticket);
        }
        ticket
    }

    pub fn is_current(&self, ticket: SetupTicket) -> bool {
        self.pending == Some(ticket)
    }

    /// Replaces the whole board with a freshly built one and has the renderer lay it out.
    ///
    /// Boards from superseded setups are rejected and the current board stays as it was.
    pub fn install(
        &mut self,
        ticket: SetupTicket,
        board: Board,
        renderer: &mut impl BoardRenderer,
    ) -> Result<()> {
        if !self.is_current(ticket) {
            log::debug!("discarding board from stale setup {:?}", ticket);
            return Err(GameError::StaleSetup);
        }

        self.pending = None;
        renderer.build_board(&board);
        self.board = Some(board);
        Ok(())
    }

    /// Marks a setup as failed. The current board, if any, stays playable.
    pub fn abandon(&mut self, ticket: SetupTicket) {
        if self.is_current(ticket) {
            self.pending = None;
        }
    }

    /// Handles a click on a cell: advances its clue and redraws that one cell when something changed.
    ///
    /// Clicks before any board exists, outside the grid, or on an already answered clue do nothing.
    pub fn select(&mut self, coords: Coord2, renderer: &mut impl BoardRenderer) -> RevealOutcome {
        let Some(board) = self.board.as_mut() else {
            log::debug!("ignoring selection {:?}, no board yet", coords);
            return RevealOutcome::NoChange;
        };

        match board.reveal(coords) {
            Ok(outcome) => {
                if outcome.has_update()
                    && let Some(text) = board[coords].displayed_text()
                {
                    renderer.update_cell(coords, text);
                }
                outcome
            }
            Err(err) => {
                log::debug!("ignoring selection {:?}: {}", coords, err);
                RevealOutcome::NoChange
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::board;
    use crate::generator::tests::FakeSource;
    use alloc::string::String;
    use alloc::vec::Vec;
    use futures_executor::block_on;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[derive(Debug, Default)]
    struct RecordingRenderer {
        builds: Vec<Vec<String>>,
        updates: Vec<(Coord2, String)>,
    }

    impl BoardRenderer for RecordingRenderer {
        fn build_board(&mut self, board: &Board) {
            self.builds.push(board.titles().map(String::from).collect());
        }

        fn update_cell(&mut self, coords: Coord2, text: &str) {
            self.updates.push((coords, String::from(text)));
        }
    }

    fn started(config: GameConfig) -> (GameSession, RecordingRenderer) {
        let mut session = GameSession::new();
        let mut renderer = RecordingRenderer::default();
        let ticket = session.begin_setup();
        session.install(ticket, board(config), &mut renderer).unwrap();
        (session, renderer)
    }

    #[test]
    fn select_before_board_is_noop() {
        let mut session = GameSession::new();
        let mut renderer = RecordingRenderer::default();

        assert_eq!(session.select((0, 0), &mut renderer), RevealOutcome::NoChange);
        assert!(renderer.updates.is_empty());
    }

    #[test]
    fn clicks_show_question_then_answer_then_nothing() {
        let (mut session, mut renderer) = started(GameConfig::default());

        assert_eq!(
            session.select((1, 2), &mut renderer),
            RevealOutcome::QuestionShown
        );
        assert_eq!(
            session.select((1, 2), &mut renderer),
            RevealOutcome::AnswerShown
        );
        assert_eq!(session.select((1, 2), &mut renderer), RevealOutcome::NoChange);
        assert_eq!(session.select((1, 2), &mut renderer), RevealOutcome::NoChange);

        assert_eq!(
            renderer.updates,
            [
                ((1, 2), String::from("q1-2")),
                ((1, 2), String::from("a1-2")),
            ]
        );
        let board = session.board().unwrap();
        assert_eq!(board[(1, 2)].showing(), Showing::Answer);
    }

    #[test]
    fn out_of_bounds_selection_is_noop() {
        let (mut session, mut renderer) = started(GameConfig::default());

        assert_eq!(session.select((6, 0), &mut renderer), RevealOutcome::NoChange);
        assert_eq!(session.select((0, 200), &mut renderer), RevealOutcome::NoChange);
        assert!(renderer.updates.is_empty());
    }

    #[test]
    fn install_renders_placeholders_for_new_board() {
        let (session, renderer) = started(GameConfig::new(3, 2, 10));

        assert_eq!(renderer.builds.len(), 1);
        assert_eq!(
            renderer.builds[0],
            ["category 0", "category 1", "category 2"]
        );
        assert!(renderer.updates.is_empty());
        assert!(!session.is_setting_up());
    }

    #[test]
    fn restart_resets_reveal_state() {
        let config = GameConfig::default();
        let (mut session, mut renderer) = started(config);
        session.select((0, 0), &mut renderer);
        session.select((0, 0), &mut renderer);
        assert_eq!(session.board().unwrap()[(0, 0)].showing(), Showing::Answer);

        let ticket = session.begin_setup();
        session.install(ticket, board(config), &mut renderer).unwrap();

        let board = session.board().unwrap();
        assert_eq!(board[(0, 0)].question(), "q0-0");
        assert_eq!(board[(0, 0)].showing(), Showing::Hidden);
        assert_eq!(renderer.builds.len(), 2);
    }

    #[test]
    fn latest_restart_wins() {
        let mut session = GameSession::new();
        let mut renderer = RecordingRenderer::default();

        let first = session.begin_setup();
        let second = session.begin_setup();

        assert_eq!(
            session.install(first, board(GameConfig::new(1, 1, 1)), &mut renderer),
            Err(GameError::StaleSetup)
        );
        assert!(session.board().is_none());
        assert!(renderer.builds.is_empty());

        session
            .install(second, board(GameConfig::new(2, 1, 2)), &mut renderer)
            .unwrap();
        assert_eq!(session.board().unwrap().size(), (2, 1));
        assert_eq!(session.restarts(), 2);

        // the first setup finishing late must not clobber the installed board
        assert_eq!(
            session.install(first, board(GameConfig::new(1, 1, 1)), &mut renderer),
            Err(GameError::StaleSetup)
        );
        assert_eq!(session.board().unwrap().size(), (2, 1));
    }

    #[test]
    fn failed_setup_keeps_previous_board_playable() {
        let config = GameConfig::default();
        let (mut session, mut renderer) = started(config);
        session.select((3, 3), &mut renderer);

        let ticket = session.begin_setup();
        let result = block_on(setup_board(
            &FakeSource::offline(),
            config,
            &mut SmallRng::seed_from_u64(5),
        ));
        assert!(result.is_err());
        session.abandon(ticket);

        assert!(!session.is_setting_up());
        assert_eq!(session.board().unwrap()[(3, 3)].showing(), Showing::Question);
        assert_eq!(
            session.select((3, 3), &mut renderer),
            RevealOutcome::AnswerShown
        );
        assert_eq!(renderer.builds.len(), 1);
    }

    #[test]
    fn abandoning_a_stale_ticket_keeps_the_newer_one_pending() {
        let mut session = GameSession::new();

        let first = session.begin_setup();
        let second = session.begin_setup();
        session.abandon(first);

        assert!(session.is_setting_up());
        assert!(session.is_current(second));
    }
}
