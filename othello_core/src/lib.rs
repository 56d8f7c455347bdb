//! Othello (Reversi) rule engine.
//!
//! このクレートは盤面・合法手生成・着手（反転処理）を行う `engine` を提供します。
//! 終局判定や勝敗表示は UI（`othello_tty`）側の責務です。

#![forbid(unsafe_code)]

extern crate alloc;

/// 盤面・石・座標と着手規則を提供するモジュール。
pub mod engine;
