#[cfg(test)]
pub mod test {
    use anyhow::{anyhow, Result};

    use crate::outcome::{has_four_in_a_row, is_board_full};
    use crate::{
        Board, Difficulty, Engine, EngineConfig, EngineError, Outcome, Rationale, Side,
        CENTER_COLUMN, HEIGHT, WIDTH,
    };

    fn seeded_engine() -> Engine {
        Engine::new(EngineConfig::default().with_seed(42))
    }

    fn drawn_board() -> Result<Board> {
        Ok(Board::from_rows(&[
            "RYRYRYR",
            "RYRYRYR",
            "YRYRYRY",
            "YRYRYRY",
            "RYRYRYR",
            "RYRYRYR",
        ])?)
    }

    #[test]
    pub fn four_in_a_row_is_mirror_symmetric() -> Result<()> {
        let positions = [
            "",
            "1122334",
            "7766554",
            "1717171",
            "12233434474",
            "4455667",
            "33441",
        ];
        for moves in positions.iter() {
            let board = Board::from_moves(moves)?;
            let mirror = board.mirrored();
            for &side in &[Side::Red, Side::Yellow] {
                assert_eq!(
                    has_four_in_a_row(&board, side),
                    has_four_in_a_row(&mirror, side),
                    "position '{}'",
                    moves
                );
            }
        }
        let board = drawn_board()?;
        assert!(!has_four_in_a_row(&board.mirrored(), Side::Red));
        assert!(!has_four_in_a_row(&board.mirrored(), Side::Yellow));
        Ok(())
    }

    #[test]
    pub fn rising_diagonal_win() -> Result<()> {
        // red completes columns 1-4 diagonally with the last move
        let board = Board::from_moves("1223343447")?;
        assert!(!has_four_in_a_row(&board, Side::Red));
        let board = Board::from_moves("12233434474")?;
        assert!(has_four_in_a_row(&board, Side::Red));
        assert!(!has_four_in_a_row(&board, Side::Yellow));
        Ok(())
    }

    #[test]
    pub fn empty_board_moves_stay_on_the_board() -> Result<()> {
        let mut engine = seeded_engine();
        let board = engine.new_board();
        for depth in 1..=4 {
            for &side in &[Side::Red, Side::Yellow] {
                let column = engine.choose_move(&board, depth, side)?;
                assert!(column < WIDTH);
                assert!(board.is_column_playable(column));
            }
        }
        Ok(())
    }

    #[test]
    pub fn empty_board_prefers_the_center() -> Result<()> {
        let mut engine = seeded_engine();
        let column = engine.choose_move(&Board::new(), 1, Side::Yellow)?;
        assert_eq!(column, CENTER_COLUMN);
        Ok(())
    }

    #[test]
    pub fn takes_an_immediate_win() -> Result<()> {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "....R..",
            "YYY.R.R",
        ])?;
        let mut engine = seeded_engine();
        for depth in 1..=3 {
            assert_eq!(engine.choose_move(&board, depth, Side::Yellow)?, 3);
        }

        let vertical = Board::from_moves("121212")?;
        assert_eq!(engine.choose_move(&vertical, 2, Side::Red)?, 0);
        Ok(())
    }

    #[test]
    pub fn blocks_a_single_threat() -> Result<()> {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "Y......",
            "RRR....",
        ])?;
        let mut engine = seeded_engine();
        for &depth in &[2, 4] {
            assert_eq!(engine.choose_move(&board, depth, Side::Yellow)?, 3);
        }
        Ok(())
    }

    #[test]
    pub fn answers_an_open_three() -> Result<()> {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "..Y....",
            ".RRR...",
        ])?;
        let mut engine = seeded_engine();
        for depth in 2..=3 {
            let column = engine.choose_move(&board, depth, Side::Yellow)?;
            assert!(column == 0 || column == 4, "chose column {}", column);
        }
        Ok(())
    }

    #[test]
    pub fn full_board_is_a_draw() -> Result<()> {
        let board = drawn_board()?;
        let mut engine = seeded_engine();

        assert!(engine.is_board_full(&board));
        assert!(engine.legal_columns(&board).is_empty());
        assert!(!engine.has_four_in_a_row(&board, Side::Red));
        assert!(!engine.has_four_in_a_row(&board, Side::Yellow));
        assert_eq!(engine.outcome(&board), Outcome::Draw);
        assert_eq!(
            engine.choose_move(&board, 3, Side::Yellow),
            Err(EngineError::NoLegalMove)
        );
        Ok(())
    }

    #[test]
    pub fn copies_are_isolated() -> Result<()> {
        let engine = seeded_engine();
        let mut board = engine.new_board();
        engine.apply_move(&mut board, 3, Side::Red)?;
        let original = board;

        let mut copy = board;
        let row = engine.apply_move(&mut copy, 3, Side::Yellow)?;
        assert_eq!(row, HEIGHT - 2);
        assert_eq!(board, original);
        assert_eq!(board.num_pieces(), 1);
        assert_eq!(copy.num_pieces(), 2);
        Ok(())
    }

    #[test]
    pub fn hint_probabilities_form_a_distribution() -> Result<()> {
        let mut engine = Engine::new(EngineConfig::default().with_seed(42).with_hint_depth(3));
        for moves in &["", "4453", "444444", "1234567"] {
            let board = Board::from_moves(moves)?;
            let hint = engine.compute_hint(&board, Side::Red);

            let columns: Vec<usize> = hint.distribution.iter().map(|&(c, _)| c).collect();
            assert_eq!(columns, board.legal_columns());

            let sum: f64 = hint.distribution.iter().map(|&(_, p)| p).sum();
            assert!((sum - 1.0).abs() < 1e-9, "position '{}' sums to {}", moves, sum);
            assert!(hint.distribution.iter().all(|&(_, p)| (0.0..=1.0).contains(&p)));
            assert!((0.0..=100.0).contains(&hint.win_probability));

            let column = hint.column.ok_or_else(|| anyhow!("no hint for '{}'", moves))?;
            assert!(board.is_column_playable(column));
        }
        Ok(())
    }

    #[test]
    pub fn hint_blocks_the_opponent() -> Result<()> {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "....R..",
            "YYY.R.R",
        ])?;
        let mut engine = Engine::new(EngineConfig::default().with_seed(42).with_hint_depth(3));
        let hint = engine.compute_hint(&board, Side::Red);

        assert_eq!(hint.column, Some(3));
        assert_eq!(hint.rationale, Rationale::BlocksImmediateWin);
        assert_eq!(hint.win_probability, 100.0);
        assert!(hint.to_string().starts_with("Hint: Try column 3 (Win chance: 100.0%)."));
        Ok(())
    }

    #[test]
    pub fn hint_at_default_depth() -> Result<()> {
        let board = Board::from_moves("44")?;
        let mut engine = seeded_engine();
        let hint = engine.compute_hint(&board, Side::Red);
        assert!(hint.column.is_some());
        assert_eq!(hint.distribution.len(), WIDTH);

        assert_eq!(
            engine.compute_hint(&drawn_board()?, Side::Red).rationale,
            Rationale::NoMovesAvailable
        );
        Ok(())
    }

    #[test]
    pub fn ai_self_play_finishes() -> Result<()> {
        let mut engine = seeded_engine();
        let mut board = engine.new_board();
        let mut side = Side::Red;
        let mut moves = 0;

        while engine.outcome(&board) == Outcome::InProgress {
            let column = engine.choose_move_at(&board, Difficulty::Easy, side)?;
            engine.apply_move(&mut board, column, side)?;
            side = side.other();
            moves += 1;
            assert!(moves <= WIDTH * HEIGHT);
        }

        match engine.outcome(&board) {
            Outcome::Win(winner) => assert!(has_four_in_a_row(&board, winner)),
            Outcome::Draw => assert!(is_board_full(&board)),
            Outcome::InProgress => unreachable!(),
        }
        assert!(engine.node_count() > moves);
        Ok(())
    }
}
