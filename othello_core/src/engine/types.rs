use core::fmt;

/// 盤の一辺の長さ（マス）。
pub const BOARD_LEN: u8 = 8;

/// 手番（石の色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Color {
    /// 先手。
    Black,
    /// 後手。
    White,
}

impl Color {
    /// 記号（`'B'` / `'X'` は黒、`'W'` / `'O'` は白）から色を得る。
    ///
    /// 大文字・小文字は区別しない。該当しない記号は `None`。
    #[inline]
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'B' | 'X' => Some(Self::Black),
            'W' | 'O' => Some(Self::White),
            _ => None,
        }
    }

    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// 盤面表示に使う記号を返す。
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Black => 'B',
            Self::White => 'W',
        }
    }
}

impl fmt::Display for Color {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::Black => "Black",
            Self::White => "White",
        };
        formatter.write_str(name)
    }
}

/// 走査方向（8方向）。
///
/// `x` は東向き、`y` は南向きに増える。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Direction {
    /// 東（x + 1）。
    East,
    /// 北（y - 1）。
    North,
    /// 北東。
    NorthEast,
    /// 北西。
    NorthWest,
    /// 南（y + 1）。
    South,
    /// 南東。
    SouthEast,
    /// 南西。
    SouthWest,
    /// 西（x - 1）。
    West,
}

impl Direction {
    /// 走査順に並べた全方向。
    pub const ALL: [Self; 8] = [
        Self::East,
        Self::NorthEast,
        Self::North,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    /// 1ステップあたりの移動量 `(dx, dy)` を返す。
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::East => (1, 0),
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::NorthWest => (-1, -1),
            Self::South => (0, 1),
            Self::SouthEast => (1, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
        }
    }
}

/// 盤面上の座標 `(x, y)`。
///
/// 盤外の値も保持できる。盤内かどうかは [`Coordinate::is_on_board`] で判定する。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// 列（0..=7 が盤内）。
    x: i8,
    /// 行（0..=7 が盤内）。
    y: i8,
}

impl Coordinate {
    /// 盤内の全座標を `x` 外側、`y` 内側の順で返す。
    #[inline]
    pub fn all() -> impl Iterator<Item = Self> {
        let len = i8::try_from(BOARD_LEN).unwrap_or(i8::MIN);
        (0..len).flat_map(move |x| (0..len).map(move |y| Self { x, y }))
    }

    /// 盤内に収まっているかを返す。
    #[inline]
    #[must_use]
    pub fn is_on_board(self) -> bool {
        Self::axis_index(self.x).is_some() && Self::axis_index(self.y).is_some()
    }

    /// 座標を生成する（範囲チェックなし）。
    #[inline]
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// 配列添字 `(x, y)` を返す。盤外なら `None`。
    #[inline]
    #[must_use]
    pub fn index(self) -> Option<(usize, usize)> {
        match (Self::axis_index(self.x), Self::axis_index(self.y)) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }

    /// 指定方向に1マス進んだ座標を返す。盤外へ出る場合は `None`。
    #[inline]
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let next = match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Self { x, y },
            _ => return None,
        };

        next.is_on_board().then_some(next)
    }

    /// 列を返す。
    #[inline]
    #[must_use]
    pub const fn x(self) -> i8 {
        self.x
    }

    /// 行を返す。
    #[inline]
    #[must_use]
    pub const fn y(self) -> i8 {
        self.y
    }

    /// 1軸分の値を添字に変換する。
    fn axis_index(value: i8) -> Option<usize> {
        match usize::try_from(value) {
            Ok(index) if index < usize::from(BOARD_LEN) => Some(index),
            _ => None,
        }
    }
}

impl fmt::Display for Coordinate {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Coordinate, Direction};

    #[test]
    fn color_symbols() {
        assert_eq!(Color::from_symbol('b'), Some(Color::Black));
        assert_eq!(Color::from_symbol('O'), Some(Color::White));
        assert_eq!(Color::from_symbol('.'), None);
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
    }

    #[test]
    fn all_covers_board_in_order() {
        let coords: Vec<Coordinate> = Coordinate::all().collect();
        assert_eq!(coords.len(), 64);
        assert_eq!(coords.first(), Some(&Coordinate::new(0, 0)));
        assert_eq!(coords.get(1), Some(&Coordinate::new(0, 1)));
        assert_eq!(coords.last(), Some(&Coordinate::new(7, 7)));
        assert!(coords.iter().all(|coord| coord.is_on_board()));
    }

    #[test]
    fn off_board_coordinates_have_no_index() {
        assert_eq!(Coordinate::new(-1, 0).index(), None);
        assert_eq!(Coordinate::new(0, 8).index(), None);
        assert_eq!(Coordinate::new(i8::MAX, i8::MIN).index(), None);
        assert_eq!(Coordinate::new(7, 0).index(), Some((7, 0)));
    }

    #[test]
    fn step_stops_at_edges() {
        let corner = Coordinate::new(0, 0);
        assert_eq!(corner.step(Direction::West), None);
        assert_eq!(corner.step(Direction::North), None);
        assert_eq!(corner.step(Direction::NorthEast), None);
        assert_eq!(corner.step(Direction::SouthEast), Some(Coordinate::new(1, 1)));

        let far = Coordinate::new(7, 7);
        for direction in [Direction::East, Direction::South, Direction::SouthEast] {
            assert_eq!(far.step(direction), None, "{direction:?}");
        }
        assert_eq!(far.step(Direction::NorthWest), Some(Coordinate::new(6, 6)));
    }

    #[test]
    fn step_from_extreme_values_does_not_overflow() {
        let coord = Coordinate::new(i8::MAX, i8::MIN);
        for direction in Direction::ALL {
            assert_eq!(coord.step(direction), None);
        }
    }
}
