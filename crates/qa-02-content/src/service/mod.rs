//! # Content Service
//!
//! Implements `ContentApi` over the document store repositories. Ownership
//! checks that guard a write run inside the same optimistic update as the
//! write itself.

use async_trait::async_trait;
use qa_01_document_store::domain::ownership;
use qa_01_document_store::{
    with_deadline, DocumentStore, Mutation, OwnershipLookup, QuestionFilter, QuestionQuery,
    QuestionRepository, SortOrder, TagRepository,
};
use shared_types::{
    Answer, ContentError, ContentResult, ObjectId, Question, Tag, UserId,
};
use tracing::{debug, info, instrument};

use crate::domain::config::ContentConfig;
use crate::domain::validation;
use crate::metrics;
use crate::ports::inbound::{ContentApi, NewQuestion};


/// Question/answer content service.
pub struct ContentService<S: ?Sized> {
    questions: QuestionRepository<S>,
    tags: TagRepository<S>,
    config: ContentConfig,
}

impl<S: DocumentStore + ?Sized> ContentService<S> {
    pub fn new(questions: QuestionRepository<S>, tags: TagRepository<S>) -> Self {
        Self::with_config(questions, tags, ContentConfig::default())
    }

    pub fn with_config(
        questions: QuestionRepository<S>,
        tags: TagRepository<S>,
        config: ContentConfig,
    ) -> Self {
        Self {
            questions,
            tags,
            config,
        }
    }

    async fn list(&self, query: QuestionQuery) -> ContentResult<Vec<Question>> {
        let result = with_deadline(self.config.operation_timeout, self.questions.query(&query)).await?;
        debug!(filter = ?query.filter, count = result.total_count, "questions listed");
        Ok(result.items)
    }
}

#[async_trait]
impl<S: DocumentStore + ?Sized> ContentApi for ContentService<S> {
    #[instrument(skip(self, request), fields(user = %request.user_id))]
    async fn post_question(&self, request: NewQuestion) -> ContentResult<Question> {
        let text = validation::question_text(&request.text)?;
        let tags = validation::question_tags(&request.tags)?;
        let question = Question::new(
            request.user_id,
            text,
            request.details.trim().to_string(),
            tags,
            self.questions.now(),
        );

        with_deadline(self.config.operation_timeout, self.questions.insert(&question)).await?;
        metrics::record_question_created();
        info!(question_id = %question.id, "question posted");
        Ok(question)
    }

    async fn get_question(&self, question_id: &str) -> ContentResult<Question> {
        let id = ObjectId::parse_str(question_id)?;
        with_deadline(self.config.operation_timeout, self.questions.find(&id)).await
    }

    async fn questions_by_user(&self, user: &UserId) -> ContentResult<Vec<Question>> {
        self.list(QuestionQuery::new(QuestionFilter::ByUser(user.clone())))
            .await
    }

    async fn questions_by_tags(&self, tags: &[String]) -> ContentResult<Vec<Question>> {
        let tags = validation::sanitize_tags(tags);
        if tags.is_empty() {
            return Err(ContentError::Validation(
                "at least one tag is required".to_string(),
            ));
        }
        self.list(QuestionQuery::new(QuestionFilter::AnyTag(tags))).await
    }

    async fn questions_by_word(&self, word: &str) -> ContentResult<Vec<Question>> {
        let word = validation::search_term(word, "search word")?;
        self.list(QuestionQuery::new(QuestionFilter::Word(word))).await
    }

    async fn search(&self, keyword: &str) -> ContentResult<Vec<Question>> {
        let keyword = validation::search_term(keyword, "keyword")?;
        self.list(QuestionQuery::new(QuestionFilter::Keyword(keyword)))
            .await
    }

    #[instrument(skip(self, user), fields(user = %user))]
    async fn delete_question(&self, question_id: &str, user: &UserId) -> ContentResult<()> {
        let id = ObjectId::parse_str(question_id)?;
        with_deadline(self.config.operation_timeout, async {
            let owner = self.questions.question_author(&id).await?;
            if &owner != user {
                return Err(ContentError::Unauthorized(
                    "only the question owner can delete the question".to_string(),
                ));
            }
            self.questions.delete(&id).await
        })
        .await?;
        info!(question_id = %id, "question deleted");
        Ok(())
    }

    #[instrument(skip(self, user, text), fields(user = %user))]
    async fn post_answer(
        &self,
        question_id: &str,
        user: &UserId,
        text: &str,
    ) -> ContentResult<Answer> {
        let text = validation::answer_text(text)?;
        let id = ObjectId::parse_str(question_id)?;

        let answer = with_deadline(
            self.config.operation_timeout,
            self.questions.update(&id, |question, now| {
                if ownership::question_author(question) == user {
                    return Err(ContentError::Unauthorized(
                        "cannot answer your own question".to_string(),
                    ));
                }
                let answer = Answer::new(question.id, user.clone(), text.clone(), now);
                question.answers.push(answer.clone());
                Ok(Mutation::Commit(answer))
            }),
        )
        .await?;

        metrics::record_answer_created();
        info!(question_id = %id, answer_id = %answer.id, "answer posted");
        Ok(answer)
    }

    #[instrument(skip(self, user), fields(user = %user))]
    async fn delete_answer(
        &self,
        question_id: &str,
        answer_id: &str,
        user: &UserId,
    ) -> ContentResult<()> {
        let question_id = ObjectId::parse_str(question_id)?;
        let answer_id = ObjectId::parse_str(answer_id)?;

        with_deadline(
            self.config.operation_timeout,
            self.questions.update(&question_id, |question, _| {
                if ownership::answer_author(question, &answer_id)? != user {
                    return Err(ContentError::Unauthorized(
                        "only the answer author can delete the answer".to_string(),
                    ));
                }
                question.remove_answer(&answer_id);
                Ok(Mutation::Commit(()))
            }),
        )
        .await?;
        info!(question_id = %question_id, answer_id = %answer_id, "answer deleted");
        Ok(())
    }

    #[instrument(skip(self, user), fields(user = %user))]
    async fn mark_answered(&self, question_id: &str, user: &UserId) -> ContentResult<()> {
        let id = ObjectId::parse_str(question_id)?;
        with_deadline(
            self.config.operation_timeout,
            self.questions.update(&id, |question, _| {
                ownership::ensure_question_owner(question, user, "mark it answered")?;
                if question.is_answered {
                    return Ok(Mutation::Skip(()));
                }
                question.is_answered = true;
                Ok(Mutation::Commit(()))
            }),
        )
        .await
    }

    async fn user_feed(&self, user: &UserId) -> ContentResult<Vec<Question>> {
        debug!(user = %user, limit = self.config.feed_limit, "building feed");
        self.list(
            QuestionQuery::new(QuestionFilter::All)
                .sorted(SortOrder::NewestFirst)
                .limit(self.config.feed_limit),
        )
        .await
    }

    #[instrument(skip(self, description))]
    async fn add_tag(&self, name: &str, description: &str) -> ContentResult<Tag> {
        let name = validation::sanitize_tag(name).ok_or_else(|| {
            ContentError::Validation(format!(
                "tag name must be 1 to {} characters",
                validation::MAX_TAG_LEN
            ))
        })?;
        let tag = Tag {
            id: ObjectId::new(),
            name,
            description: description.trim().to_string(),
            created_at: self.questions.now(),
        };
        with_deadline(self.config.operation_timeout, self.tags.insert(&tag)).await?;
        info!(tag = %tag.name, "tag added");
        Ok(tag)
    }

    #[instrument(skip(self))]
    async fn remove_tag(&self, name: &str) -> ContentResult<()> {
        let name = validation::sanitize_tag(name)
            .ok_or_else(|| ContentError::NotFound(format!("tag {name}")))?;
        with_deadline(self.config.operation_timeout, self.tags.remove(&name)).await
    }

    async fn list_tags(&self) -> ContentResult<Vec<Tag>> {
        with_deadline(self.config.operation_timeout, self.tags.list()).await
    }
}
