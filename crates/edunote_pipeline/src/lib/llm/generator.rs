use std::{fmt::Debug, future::Future};

/// An external text-generation collaborator. The pipeline's only
/// responsibilities around it are prompt construction and passing the
/// returned text through unmodified.
pub trait Generator {
    /// Upper bound, in characters, on lecture text embedded in a prompt.
    const CONTEXT_WINDOW_LIMIT: usize = 128_000 - 18_000;
    const GENERATOR_MODEL: &'static str;

    type Error: Debug;

    fn generate(
        &self,
        prompt: &str,
        max_new_tokens: u32,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

impl<G: Generator + Sync> Generator for &G {
    const CONTEXT_WINDOW_LIMIT: usize = G::CONTEXT_WINDOW_LIMIT;
    const GENERATOR_MODEL: &'static str = G::GENERATOR_MODEL;

    type Error = G::Error;

    async fn generate(&self, prompt: &str, max_new_tokens: u32) -> Result<String, Self::Error> {
        (**self).generate(prompt, max_new_tokens).await
    }
}
