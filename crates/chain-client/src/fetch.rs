// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{thread, time::Duration};

use reqwest::{blocking::Client, StatusCode};
use tracing::{info, warn};

use crate::error::ClientError;

/// Response header carrying the base64 inclusion proof.
pub const PROOF_HEADER: &str = "x-kyve-proof";

/// Maximum number of fetch attempts before the last error is surfaced.
pub const BACKOFF_MAX_RETRIES: u32 = 10;

/// Base unit of the exponential backoff delay.
const BACKOFF_DELAY_UNIT: Duration = Duration::from_secs(1);

/// A raw gateway response: the body bytes plus the inclusion proof, if the
/// server attached one.
#[derive(Debug)]
pub struct GatewayResponse {
    /// The raw response body.
    pub body: Vec<u8>,
    /// Base64 proof from the [`PROOF_HEADER`] header.
    pub proof: Option<String>,
}

/// Fetches a url once, returning the body and the proof header.
pub fn get_from_url(url: &str) -> Result<GatewayResponse, ClientError> {
    let client = Client::builder()
        .user_agent(concat!("trustless-client/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client.get(url).send()?;
    if response.status() != StatusCode::OK {
        return Err(ClientError::Status {
            code: response.status().as_u16(),
            url: url.to_owned(),
        });
    }

    let proof = response
        .headers()
        .get(PROOF_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = response.bytes()?.to_vec();

    Ok(GatewayResponse { body, proof })
}

/// Fetches a url, retrying failed attempts with exponential backoff until
/// [`BACKOFF_MAX_RETRIES`] is exhausted.
pub fn get_from_url_with_backoff(url: &str) -> Result<GatewayResponse, ClientError> {
    retry_with_backoff(
        BACKOFF_MAX_RETRIES,
        BACKOFF_DELAY_UNIT,
        || get_from_url(url),
        thread::sleep,
    )
}

/// Runs `op` up to `max_retries` times, sleeping `2^i` delay units after the
/// i-th failed attempt. The last error is returned once the attempts are
/// exhausted, which bounds the total stall to the sum of the delays.
///
/// Every failure is treated as retryable; a fixed payload that can never
/// succeed still terminates after `max_retries` attempts.
fn retry_with_backoff<T, E, O, S>(
    max_retries: u32,
    delay_unit: Duration,
    mut op: O,
    mut sleep: S,
) -> Result<T, E>
where
    E: std::fmt::Display,
    O: FnMut() -> Result<T, E>,
    S: FnMut(Duration),
{
    let mut attempt = 0;
    loop {
        match op() {
            Ok(value) => {
                // only log if there was anything to recover from
                if attempt > 0 {
                    info!(attempt, "fetch succeeded after retrying");
                }
                return Ok(value);
            }
            Err(err) => {
                let delay = delay_unit * (1u32 << attempt);
                warn!(%err, delay_secs = delay.as_secs(), "fetch failed, backing off");
                sleep(delay);

                attempt += 1;
                if attempt >= max_retries {
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_makes_exactly_max_attempts() {
        let mut attempts = 0u32;
        let mut slept = Vec::new();

        let result: Result<(), &str> = retry_with_backoff(
            5,
            Duration::from_millis(1),
            || {
                attempts += 1;
                Err("unreachable host")
            },
            |delay| slept.push(delay),
        );

        assert_eq!(result, Err("unreachable host"));
        assert_eq!(attempts, 5);
        assert_eq!(
            slept,
            [1, 2, 4, 8, 16].map(Duration::from_millis).to_vec()
        );
    }

    #[test]
    fn test_backoff_stops_at_first_success() {
        let mut attempts = 0u32;
        let mut slept = Vec::new();

        let result: Result<u32, &str> = retry_with_backoff(
            5,
            Duration::from_millis(1),
            || {
                attempts += 1;
                if attempts < 3 {
                    Err("flaky")
                } else {
                    Ok(attempts)
                }
            },
            |delay| slept.push(delay),
        );

        assert_eq!(result, Ok(3));
        assert_eq!(slept.iter().sum::<Duration>(), Duration::from_millis(3));
    }

    #[test]
    fn test_no_sleep_on_immediate_success() {
        let mut slept = Vec::new();

        let result: Result<(), &str> =
            retry_with_backoff(5, Duration::from_millis(1), || Ok(()), |d| slept.push(d));

        assert_eq!(result, Ok(()));
        assert!(slept.is_empty());
    }
}
