// unsaved-changes confirmation shared by Open and Exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAnswer {
    Save,
    Discard,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Proceed { save_first: bool },
    Abort,
}

/// Decide whether the triggering operation may proceed. The `answer` closure
/// asks the user and only runs when there are unsaved changes.
///
/// Save-then-proceed proceeds even when the save itself ends up doing nothing
/// (the user can still cancel the Save As picker mid-flow). That asymmetry
/// matches the reference editor and is kept on purpose.
pub fn resolve(modified: bool, answer: impl FnOnce() -> SaveAnswer) -> ConfirmOutcome {
    if !modified {
        return ConfirmOutcome::Proceed { save_first: false };
    }

    match answer() {
        SaveAnswer::Cancel => ConfirmOutcome::Abort,
        SaveAnswer::Discard => ConfirmOutcome::Proceed { save_first: false },
        SaveAnswer::Save => ConfirmOutcome::Proceed { save_first: true },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_buffer_proceeds_without_asking() {
        let outcome = resolve(false, || panic!("must not ask"));
        assert_eq!(outcome, ConfirmOutcome::Proceed { save_first: false });
    }

    #[test]
    fn cancel_aborts_the_operation() {
        assert_eq!(resolve(true, || SaveAnswer::Cancel), ConfirmOutcome::Abort);
    }

    #[test]
    fn discard_proceeds_without_saving() {
        assert_eq!(
            resolve(true, || SaveAnswer::Discard),
            ConfirmOutcome::Proceed { save_first: false }
        );
    }

    #[test]
    fn save_proceeds_with_save_first() {
        assert_eq!(
            resolve(true, || SaveAnswer::Save),
            ConfirmOutcome::Proceed { save_first: true }
        );
    }
}
