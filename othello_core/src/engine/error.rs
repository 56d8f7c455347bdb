use crate::engine::types::Coordinate;

/// 着手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum BoardError {
    /// 指定マスが合法手ではない（`PlacementPolicy::Strict` のときのみ）。
    #[error("{coordinate} is not a legal move")]
    IllegalMove {
        /// 指定された座標。
        coordinate: Coordinate,
    },
    /// 指定座標が盤外。
    #[error("{coordinate} is outside the 8x8 board")]
    OutOfRange {
        /// 指定された座標。
        coordinate: Coordinate,
    },
}

#[cfg(test)]
mod tests {
    use super::BoardError;
    use crate::engine::types::Coordinate;

    #[test]
    fn messages_name_the_coordinate() {
        let err = BoardError::OutOfRange {
            coordinate: Coordinate::new(8, -1),
        };
        assert_eq!(err.to_string(), "(8, -1) is outside the 8x8 board");

        let err = BoardError::IllegalMove {
            coordinate: Coordinate::new(0, 0),
        };
        assert_eq!(err.to_string(), "(0, 0) is not a legal move");
    }
}
