use alloc::collections::BTreeSet;
use core::fmt;

use tracing::{debug, trace, warn};

use crate::engine::disc::Disc;
use crate::engine::error::BoardError;
use crate::engine::policy::PlacementPolicy;
use crate::engine::types::{BOARD_LEN, Color, Coordinate, Direction};

/// 盤面の一辺（配列長）。
const SIDE: usize = BOARD_LEN as usize;

/// 8x8 のマス目。`tiles[x][y]` で参照する。
pub type Tiles = [[Option<Disc>; SIDE]; SIDE];

/// 初期配置の白石。
const START_WHITE: [Coordinate; 2] = [Coordinate::new(3, 3), Coordinate::new(4, 4)];

/// 初期配置の黒石。
const START_BLACK: [Coordinate; 2] = [Coordinate::new(3, 4), Coordinate::new(4, 3)];

/// 盤面（マス目＋手番）。
///
/// 着手は [`Board::place_disc`] のみで行う。石が取り除かれることはなく、
/// 挟まれた石はその場で反転される。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    /// 着手時の合法手判定の方針。
    policy: PlacementPolicy,
    /// マス目。
    tiles: Tiles,
    /// 手番。
    turn: Color,
}

/// 1回の着手の結果。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    /// 置いた石の色。
    color: Color,
    /// 置いたマス。
    coordinate: Coordinate,
    /// 反転したマス（方向順）。
    flipped: Vec<Coordinate>,
}

impl Placement {
    /// 置いた石の色を返す。
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// 置いたマスを返す。
    #[inline]
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// 反転したマスを返す。
    #[inline]
    #[must_use]
    pub fn flipped(&self) -> &[Coordinate] {
        &self.flipped
    }
}

impl Board {
    /// 指定マスの石を返す。
    ///
    /// # Errors
    ///
    /// 盤外の座標なら `BoardError::OutOfRange` を返す。
    #[inline]
    pub fn disc_at(&self, coordinate: Coordinate) -> Result<Option<Disc>, BoardError> {
        if coordinate.is_on_board() {
            Ok(self.cell(coordinate))
        } else {
            Err(BoardError::OutOfRange { coordinate })
        }
    }

    /// 石数（黒、白）を返す。
    #[inline]
    #[must_use]
    pub fn disc_count(&self) -> (u32, u32) {
        self.tiles
            .iter()
            .flatten()
            .flatten()
            .fold((u32::MIN, u32::MIN), |(black, white), disc| {
                match disc.color() {
                    Color::Black => (black.saturating_add(1), white),
                    Color::White => (black, white.saturating_add(1)),
                }
            })
    }

    /// 空きマスの数を返す。
    #[inline]
    #[must_use]
    pub fn empty_count(&self) -> u32 {
        let (black, white) = self.disc_count();
        u32::from(BOARD_LEN)
            .saturating_mul(u32::from(BOARD_LEN))
            .saturating_sub(black.saturating_add(white))
    }

    /// 現手番にとって合法手かどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_legal(&self, coordinate: Coordinate) -> bool {
        self.legal_moves().contains(&coordinate)
    }

    /// 現手番の合法手を返す。
    ///
    /// 手番側の石それぞれから8方向へ走査し、相手の石が1つ以上続いた先の
    /// 最初の空きマスを合法手とする。盤面は変更しない。
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> BTreeSet<Coordinate> {
        let color = self.turn;

        Coordinate::all()
            .filter(|&origin| self.cell(origin).is_some_and(|disc| disc.color() == color))
            .flat_map(move |origin| {
                Direction::ALL
                    .into_iter()
                    .filter_map(move |direction| self.move_in_dir(origin, color, direction))
            })
            .collect()
    }

    /// 初期局面を返す（合法手判定なし）。
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(PlacementPolicy::default())
    }

    /// 石を置き、挟んだ石を反転して手番を交代する。
    ///
    /// 8方向それぞれについて、置いた石から相手の石が連続し、その先に自分の石が
    /// あれば間の石をすべて反転する。空きマスか盤端に達した方向は何もしない。
    /// 各方向は置いた石だけを起点に独立して判定する。
    ///
    /// `PlacementPolicy::Permissive` では合法手かどうかを確認せず、石がある
    /// マスにも上書きし、反転が無くても手番を交代する。
    ///
    /// # Errors
    ///
    /// 次の場合は盤面を変更せずにエラーを返す：
    /// - `BoardError::OutOfRange`: 座標が盤外
    /// - `BoardError::IllegalMove`: `PlacementPolicy::Strict` で合法手ではない
    #[inline]
    pub fn place_disc(&mut self, coordinate: Coordinate) -> Result<Placement, BoardError> {
        if !coordinate.is_on_board() {
            debug!(%coordinate, "rejected placement outside the board");
            return Err(BoardError::OutOfRange { coordinate });
        }

        if self.policy == PlacementPolicy::Strict && !self.is_legal(coordinate) {
            debug!(%coordinate, turn = %self.turn, "rejected illegal placement");
            return Err(BoardError::IllegalMove { coordinate });
        }

        let color = self.turn;
        if let Some(previous) = self.cell(coordinate) {
            warn!(%coordinate, previous = %previous.color(), "overwriting occupied cell");
        }

        if let Some(cell) = self.cell_slot_mut(coordinate) {
            *cell = Some(Disc::new(color));
        }

        let runs: Vec<(Direction, Vec<Coordinate>)> = Direction::ALL
            .into_iter()
            .map(|direction| (direction, self.flips_in_dir(coordinate, color, direction)))
            .collect();

        let mut flipped = Vec::new();
        for (direction, run) in runs {
            if run.is_empty() {
                continue;
            }

            trace!(?direction, count = run.len(), "flipping run");
            for target in run {
                if let Some(Some(disc)) = self.cell_slot_mut(target) {
                    disc.flip();
                }
                flipped.push(target);
            }
        }

        if flipped.is_empty() {
            warn!(%coordinate, %color, "placement captured nothing");
        }

        self.turn = color.opponent();
        debug!(
            %coordinate,
            %color,
            flipped = flipped.len(),
            next = %self.turn,
            "placed disc"
        );

        Ok(Placement {
            color,
            coordinate,
            flipped,
        })
    }

    /// 着手時の方針を返す。
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    /// マス目を返す。
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &Tiles {
        &self.tiles
    }

    /// 手番を返す。
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    /// 指定方針で初期局面を返す。
    ///
    /// 白を (3,3) と (4,4)、黒を (3,4) と (4,3) に置き、黒番から始める。
    #[inline]
    #[must_use]
    pub fn with_policy(policy: PlacementPolicy) -> Self {
        let mut board = Self {
            policy,
            tiles: [[None; SIDE]; SIDE],
            turn: Color::Black,
        };

        for (coordinates, color) in [(START_WHITE, Color::White), (START_BLACK, Color::Black)] {
            for coordinate in coordinates {
                if let Some(cell) = board.cell_slot_mut(coordinate) {
                    *cell = Some(Disc::new(color));
                }
            }
        }

        board
    }

    /// 文字列の盤面から生成する（テスト用）。
    ///
    /// 各行が `y`、行内の文字位置が `x`。`.` と `-` は空きマス。
    #[cfg(test)]
    pub(crate) fn from_layout(rows: [&str; SIDE], turn: Color) -> Self {
        let mut board = Self {
            policy: PlacementPolicy::Permissive,
            tiles: [[None; SIDE]; SIDE],
            turn,
        };

        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                let disc = match symbol {
                    '.' | '-' => None,
                    other => Some(Disc::from_symbol(other)),
                };
                if let Some(cell) = board.tiles.get_mut(x).and_then(|column| column.get_mut(y)) {
                    *cell = disc;
                }
            }
        }

        board
    }

    /// 指定マスの石を返す。盤外は空きとして扱う。
    fn cell(&self, coordinate: Coordinate) -> Option<Disc> {
        match coordinate.index() {
            Some((x, y)) => self.tiles.get(x).and_then(|column| column.get(y)).copied().flatten(),
            None => None,
        }
    }

    /// 指定マスへの可変参照を返す。盤外は `None`。
    fn cell_slot_mut(&mut self, coordinate: Coordinate) -> Option<&mut Option<Disc>> {
        match coordinate.index() {
            Some((x, y)) => self.tiles.get_mut(x).and_then(|column| column.get_mut(y)),
            None => None,
        }
    }

    /// 置いた石から1方向に走査し、反転すべきマスを返す。
    ///
    /// 相手の石の連続の先に `color` の石が無ければ空を返す。
    fn flips_in_dir(&self, origin: Coordinate, color: Color, direction: Direction) -> Vec<Coordinate> {
        let mut run = Vec::new();
        let mut cursor = origin;

        loop {
            cursor = match cursor.step(direction) {
                Some(next) => next,
                None => return Vec::new(),
            };

            match self.cell(cursor) {
                None => return Vec::new(),
                Some(disc) if disc.color() == color => return run,
                Some(_) => run.push(cursor),
            }
        }
    }

    /// `origin` の石から1方向に走査し、合法手となる空きマスを返す。
    fn move_in_dir(&self, origin: Coordinate, color: Color, direction: Direction) -> Option<Coordinate> {
        let mut cursor = origin;
        let mut captured = false;

        loop {
            cursor = match cursor.step(direction) {
                Some(next) => next,
                None => return None,
            };

            match self.cell(cursor) {
                None => return captured.then_some(cursor),
                Some(disc) if disc.color() == color => return None,
                Some(_) => captured = true,
            }
        }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = i8::try_from(BOARD_LEN).unwrap_or(i8::MIN);
        let mut text = String::with_capacity(SIDE.saturating_mul(SIDE.saturating_add(1)));

        for y in 0..len {
            for x in 0..len {
                let symbol = match self.cell(Coordinate::new(x, y)) {
                    Some(disc) => disc.color().symbol(),
                    None => '.',
                };
                text.push(symbol);
            }
            text.push('\n');
        }

        formatter.write_str(&text)
    }
}
