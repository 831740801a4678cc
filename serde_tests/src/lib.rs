#[cfg(test)]
mod tests {

    use std::error::Error;

    use ron;
    use rs_words_solver::*;

    #[test]
    fn word_serializes_as_string() -> Result<(), Box<dyn Error>> {
        let word = Word::from("crane");

        let ser = ron::to_string(&word)?;
        assert_eq!(ser, "\"crane\"");

        let deser = ron::from_str::<Word>(&ser)?;
        assert_eq!(deser, word);
        Ok(())
    }

    #[test]
    fn verdict_serde() -> Result<(), Box<dyn Error>> {
        let verdict = get_result_for_guess(&Word::from("aabbc"), &Word::from("aaaaa"))?;

        let ser = ron::to_string(&verdict)?;
        assert_eq!(ser, "[Correct,Correct,Absent,Absent,Absent]");

        let deser = ron::from_str::<Verdict>(&ser)?;
        assert_eq!(deser, verdict);
        Ok(())
    }

    #[test]
    fn game_result_serde() -> Result<(), Box<dyn Error>> {
        let bank = WordBank::from_iterator(["crane", "trace", "slate"], &Normalizer::new(), None)?;
        let result = play_game(&Word::from("trace"), 6, &bank)?;

        let ser = ron::to_string(&result)?;
        assert!(ser.starts_with("Success("));

        let deser = ron::from_str::<GameResult>(&ser)?;
        assert_eq!(deser, result);
        Ok(())
    }
}
