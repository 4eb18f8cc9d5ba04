use crate::{
    content::application::ports::outgoing::ContentQuery,
    hero::{
        application::ports::incoming::use_cases::{GetHeroUseCase, HeroView},
        domain::type_out,
    },
};

#[derive(Debug, Clone)]
pub struct GetHeroService<Q>
where
    Q: ContentQuery,
{
    query: Q,
    stagger_ms: u64,
}

impl<Q> GetHeroService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q, stagger_ms: u64) -> Self {
        Self { query, stagger_ms }
    }
}

impl<Q> GetHeroUseCase for GetHeroService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self) -> HeroView {
        let content = self.query.content();
        let profile = &content.profile;

        HeroView {
            name: profile.name.clone(),
            typed: type_out(&profile.headline, self.stagger_ms),
            resume_path: profile.resume_path.clone(),
        }
    }
}
