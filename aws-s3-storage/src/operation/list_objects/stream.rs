/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use futures_util::Stream;

use crate::error::Error;
use crate::operation::OperationContext;
use crate::types::ObjectSummary;

use super::ListObjectsInput;

#[derive(Debug, Clone, PartialEq)]
enum State {
    Paginating {
        // continuation token of the next page to fetch, `None` for the first page
        next_token: Option<String>,
    },
    Done,
}

impl State {
    fn next_state(self, output: &ListObjectsV2Output) -> State {
        let is_truncated =
            output.is_truncated().unwrap_or(false) && output.next_continuation_token().is_some();
        match self {
            State::Paginating { .. } if is_truncated => State::Paginating {
                next_token: output.next_continuation_token.to_owned(),
            },
            _ => State::Done,
        }
    }
}

/// Lazy listing of every object in a bucket.
///
/// Pages are fetched on demand with `ListObjectsV2` as items are consumed, following
/// continuation tokens until the service reports the listing is complete. Each page request is
/// a separate remote call bounded by the configured operation timeout.
///
/// A page that fails to load is reported as an error item and the stream stays on that page,
/// so calling [`next`](ListObjectsStream::next) again retries it.
#[derive(Debug)]
pub struct ListObjectsStream {
    ctx: OperationContext,
    input: ListObjectsInput,
    state: State,
    current_page: Option<std::vec::IntoIter<aws_sdk_s3::types::Object>>,
}

impl ListObjectsStream {
    pub(crate) fn new(ctx: OperationContext, input: ListObjectsInput) -> Self {
        let state = State::Paginating {
            next_token: input.continuation_token.clone(),
        };
        Self {
            ctx,
            input,
            state,
            current_page: None,
        }
    }

    /// Get the next object, fetching the next page when the current one is exhausted.
    ///
    /// Returns `None` once every page has been read.
    pub async fn next(&mut self) -> Option<Result<ObjectSummary, Error>> {
        loop {
            if let Some(object) = self.current_page.as_mut().and_then(Iterator::next) {
                // entries without a key carry nothing a caller could act on
                match ObjectSummary::from_object(object) {
                    Some(summary) => return Some(Ok(summary)),
                    None => continue,
                }
            }

            match self.next_page().await {
                Some(Ok(())) => continue,
                Some(Err(err)) => return Some(Err(err)),
                None => return None,
            }
        }
    }

    /// Continuation token of the page this stream will fetch next.
    ///
    /// Passing this token to
    /// [`ListObjectsFluentBuilder::continuation_token`](crate::operation::list_objects::builders::ListObjectsFluentBuilder::continuation_token)
    /// resumes the listing from the following page. The token is only available at a page
    /// boundary: it is `None` while objects of the current page remain unread, before the first
    /// page is fetched (without an explicit starting token) and after the listing is complete.
    pub fn continuation_token(&self) -> Option<&str> {
        // resuming mid-page would skip the unread remainder of the page
        if self.current_page.as_ref().is_some_and(|page| page.len() > 0) {
            return None;
        }
        match &self.state {
            State::Paginating { next_token } => next_token.as_deref(),
            State::Done => None,
        }
    }

    /// Whether every page has been fetched and consumed
    pub fn is_done(&self) -> bool {
        self.state == State::Done && self.current_page.as_ref().map_or(true, |p| p.len() == 0)
    }

    /// Read the remaining objects into memory, stopping at the first error.
    pub async fn collect(mut self) -> Result<Vec<ObjectSummary>, Error> {
        let mut objects = Vec::new();
        while let Some(object) = self.next().await {
            objects.push(object?);
        }
        Ok(objects)
    }

    /// Convert into a [`Stream`] of objects.
    ///
    /// The returned stream ends after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<ObjectSummary, Error>> + Send {
        futures_util::stream::unfold(Some(self), |stream| async move {
            let mut stream = stream?;
            match stream.next().await? {
                Ok(object) => Some((Ok(object), Some(stream))),
                Err(err) => Some((Err(err), None)),
            }
        })
    }

    /// Fetch the next page, returning `None` when there are no pages left.
    async fn next_page(&mut self) -> Option<Result<(), Error>> {
        self.current_page.take();
        let next_token = match &self.state {
            State::Done => return None,
            State::Paginating { next_token } => next_token.clone(),
        };

        let result = self
            .ctx
            .run(list_page(self.ctx.client(), &self.input, next_token))
            .await;
        match result {
            Ok(mut output) => {
                let prev_state = std::mem::replace(&mut self.state, State::Done);
                self.state = prev_state.next_state(&output);
                self.current_page = output.contents.take().map(Vec::into_iter);
                Some(Ok(()))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

async fn list_page(
    client: &aws_sdk_s3::Client,
    input: &ListObjectsInput,
    continuation_token: Option<String>,
) -> Result<ListObjectsV2Output, Error> {
    let output = client
        .list_objects_v2()
        .bucket(&input.bucket)
        .set_prefix(input.prefix.clone())
        .set_max_keys(input.max_keys)
        .set_continuation_token(continuation_token)
        .send()
        .await?;

    tracing::trace!(
        "listed page of {} objects from {}",
        output.contents().len(),
        input.bucket
    );
    Ok(output)
}
