use signet_apdu_core::response::ResponseError;
use signet_apdu_core::{ApduCommand, Response};

use crate::constants::{APP_INFO_FORMAT_ID, CLA_APP_INFO, INS_APP_INFO};
use crate::error::Error;
use crate::types::{AppFlags, AppInfo};

/// APP INFO command, under the device-wide class byte.
///
/// The response is versioned by its first byte. Only format 1 has a
/// specification; anything else is reported as an unrecognized format
/// rather than parsed on guesswork.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetAppInfoCommand;

impl ApduCommand for GetAppInfoCommand {
    type Success = AppInfo;
    type Error = Error;

    fn class(&self) -> u8 {
        CLA_APP_INFO
    }

    fn instruction(&self) -> u8 {
        INS_APP_INFO
    }

    fn p1(&self) -> u8 {
        0x00
    }

    fn p2(&self) -> u8 {
        0x00
    }

    fn data(&self) -> Option<&[u8]> {
        None
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        let payload = response.payload();

        match payload.first() {
            Some(&APP_INFO_FORMAT_ID) => {}
            _ => return Err(Error::UnrecognizedResponseFormat),
        }

        let mut idx = 1;
        let name_len = usize::from(next_byte(payload, &mut idx)?);
        let app_name = String::from_utf8_lossy(next_slice(payload, &mut idx, name_len)?).into_owned();

        let version_len = usize::from(next_byte(payload, &mut idx)?);
        let app_version =
            String::from_utf8_lossy(next_slice(payload, &mut idx, version_len)?).into_owned();

        let flags_len = next_byte(payload, &mut idx)?;
        // The device declares a flags length, but the format carries
        // exactly one flags byte; read exactly one regardless.
        let flags = AppFlags::from(next_byte(payload, &mut idx)?);

        Ok(AppInfo {
            app_name,
            app_version,
            flags_len,
            flags,
        })
    }
}

fn next_byte(payload: &[u8], idx: &mut usize) -> Result<u8, ResponseError> {
    let byte = *payload
        .get(*idx)
        .ok_or(ResponseError::Parse("app info payload truncated"))?;
    *idx += 1;
    Ok(byte)
}

fn next_slice<'a>(
    payload: &'a [u8],
    idx: &mut usize,
    len: usize,
) -> Result<&'a [u8], ResponseError> {
    let slice = payload
        .get(*idx..*idx + len)
        .ok_or(ResponseError::Parse("app info payload truncated"))?;
    *idx += len;
    Ok(slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use signet_apdu_core::StatusWord;

    fn response(payload: &[u8]) -> Response {
        let mut raw = payload.to_vec();
        raw.extend_from_slice(&StatusWord::SUCCESS.to_u16().to_be_bytes());
        Response::from_bytes(&raw).unwrap()
    }

    #[test]
    fn parses_name_version_and_flags() {
        let mut payload = vec![APP_INFO_FORMAT_ID];
        payload.push(6);
        payload.extend_from_slice(b"Signet");
        payload.push(5);
        payload.extend_from_slice(b"1.4.7");
        payload.push(1);
        payload.push(0b1000_0101);

        let info = GetAppInfoCommand::parse_response(response(&payload)).unwrap();

        assert_eq!(info.app_name, "Signet");
        assert_eq!(info.app_version, "1.4.7");
        assert_eq!(info.flags_len, 1);
        assert!(info.flags.recovery());
        assert!(!info.flags.signed_mcu_code());
        assert!(info.flags.onboarded());
        assert!(info.flags.pin_validated());
    }

    #[test]
    fn reads_exactly_one_flags_byte_regardless_of_declared_length() {
        let mut payload = vec![APP_INFO_FORMAT_ID];
        payload.push(1);
        payload.push(b'A');
        payload.push(1);
        payload.push(b'1');
        payload.push(4);
        payload.extend_from_slice(&[0x02, 0xDE, 0xAD, 0xBE]);

        let info = GetAppInfoCommand::parse_response(response(&payload)).unwrap();

        assert_eq!(info.flags_len, 4);
        assert_eq!(info.flags.value, 0x02);
        assert!(info.flags.signed_mcu_code());
    }

    #[test]
    fn unknown_format_id_is_reported_not_parsed() {
        let err = GetAppInfoCommand::parse_response(response(&[0x02, 0xFF])).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedResponseFormat));
    }

    #[test]
    fn empty_payload_is_an_unrecognized_format() {
        let err = GetAppInfoCommand::parse_response(response(&[])).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedResponseFormat));
    }

    #[test]
    fn truncated_name_is_a_parse_error() {
        let payload = [APP_INFO_FORMAT_ID, 10, b'S'];
        let err = GetAppInfoCommand::parse_response(response(&payload)).unwrap_err();
        assert!(matches!(err, Error::Response(ResponseError::Parse(_))));
    }
}
