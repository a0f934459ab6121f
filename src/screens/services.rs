use async_trait::async_trait;

/// User-visible success/error notifications with already resolved text.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// What a confirmation dialog shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    /// Template used to render the dialog
    pub template: &'static str,
    pub message: String,
    pub subject_uuid: String,
    pub subject_name: String,
}

/// Modal confirmation. Resolves `true` only on an explicit confirm.
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

/// A confirmation answered up front, e.g. by the confirm button of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answered(pub bool);

#[async_trait]
impl Confirmer for Answered {
    async fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
        self.0
    }
}
