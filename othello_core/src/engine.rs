/// 盤面（マス目＋手番）と合法手生成/反転処理の実装。
pub mod board;
/// 石の実装。
pub mod disc;
pub mod error;
/// 着手時の合法手判定の方針。
pub mod policy;
pub mod types;

pub type Board = board::Board;
pub type BoardError = error::BoardError;
pub type Color = types::Color;
pub type Coordinate = types::Coordinate;
pub type Direction = types::Direction;
pub type Disc = disc::Disc;
pub type Placement = board::Placement;
pub type PlacementPolicy = policy::PlacementPolicy;
pub type PolicyParseError = policy::PolicyParseError;
pub type Tiles = board::Tiles;

/// 盤の一辺の長さ（マス）。
pub const BOARD_LEN: u8 = types::BOARD_LEN;
