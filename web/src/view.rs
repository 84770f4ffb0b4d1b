use ndarray::Array2;
use trivito_core::{Board, BoardRenderer, Coord, Coord2, ToNdIndex};

/// Shown in a cell whose clue has not been revealed yet.
pub(crate) const PLACEHOLDER: &str = "?";

/// What the table currently displays. The session writes into it through [`BoardRenderer`] and the component renders
/// it as is.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct BoardView {
    titles: Vec<String>,
    cells: Array2<Option<String>>,
}

impl BoardView {
    pub(crate) fn size(&self) -> Coord2 {
        let (cols, rows) = self.cells.dim();
        (
            Coord::try_from(cols).unwrap_or(Coord::MAX),
            Coord::try_from(rows).unwrap_or(Coord::MAX),
        )
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub(crate) fn titles(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }

    pub(crate) fn is_revealed(&self, coords: Coord2) -> bool {
        matches!(self.cells.get(coords.to_nd_index()), Some(Some(_)))
    }

    pub(crate) fn text_at(&self, coords: Coord2) -> &str {
        self.cells
            .get(coords.to_nd_index())
            .and_then(|cell| cell.as_deref())
            .unwrap_or(PLACEHOLDER)
    }
}

impl BoardRenderer for BoardView {
    fn build_board(&mut self, board: &Board) {
        self.titles = board.titles().map(str::to_string).collect();
        self.cells = Array2::default(board.size().to_nd_index());
    }

    fn update_cell(&mut self, coords: Coord2, text: &str) {
        match self.cells.get_mut(coords.to_nd_index()) {
            Some(cell) => *cell = Some(text.to_string()),
            None => log::warn!("no cell at {:?} to update", coords),
        }
    }
}
