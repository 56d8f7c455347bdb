use crate::engine::types::Color;

/// 盤上に置かれる石。
///
/// 色は [`Disc::flip`] でのみ変化する。置き換えではなく反転で状態を更新する。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Disc {
    /// 現在の色。
    color: Color,
}

impl Disc {
    /// 現在の色を返す。
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// 色を反転する（黒 ⇔ 白）。
    #[inline]
    pub const fn flip(&mut self) {
        self.color = self.color.opponent();
    }

    /// 記号から石を生成する。
    ///
    /// 解釈できない記号は黒として扱う（エラーにはしない）。
    #[inline]
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Self {
        let color = match Color::from_symbol(symbol) {
            Some(value) => value,
            None => Color::Black,
        };
        Self::new(color)
    }

    /// 指定色の石を生成する。
    #[inline]
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

#[cfg(test)]
mod tests {
    use super::Disc;
    use crate::engine::types::Color;

    #[test]
    fn flip_toggles_color_in_place() {
        let mut disc = Disc::new(Color::Black);
        disc.flip();
        assert_eq!(disc.color(), Color::White);
        disc.flip();
        assert_eq!(disc.color(), Color::Black);
    }

    #[test]
    fn unknown_symbol_falls_back_to_black() {
        assert_eq!(Disc::from_symbol('?'), Disc::new(Color::Black));
        assert_eq!(Disc::from_symbol('w'), Disc::new(Color::White));
    }

    #[test]
    fn equality_is_by_color() {
        let mut flipped = Disc::new(Color::White);
        flipped.flip();
        assert_eq!(flipped, Disc::new(Color::Black));
        assert_ne!(flipped, Disc::new(Color::White));
    }
}
