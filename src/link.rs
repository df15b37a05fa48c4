//! Deep link back to the alarm in the CloudWatch console.

/// Console entry point; the alarm's own region is passed as a query parameter.
const CONSOLE_HOME: &str = "https://ap-northeast-2.console.aws.amazon.com/cloudwatch/home";

/// ARN prefix preceding the region segment.
const ALARM_ARN_PREFIX: &str = "arn:aws:cloudwatch:";

/// Region segment of an alarm ARN (`arn:aws:cloudwatch:<region>:...`).
///
/// Returns the first colon-delimited segment after the prefix, so an ARN
/// without the prefix yields its first segment instead.
pub fn region_of(alarm_arn: &str) -> &str {
    let rest = alarm_arn.strip_prefix(ALARM_ARN_PREFIX).unwrap_or(alarm_arn);
    rest.split(':').next().unwrap_or_default()
}

/// Build the console URL showing `alarm_name`.
pub fn console_url(alarm_arn: &str, alarm_name: &str) -> String {
    format!(
        "{}?region={}#alarmsV2:alarm/{}",
        CONSOLE_HOME,
        region_of(alarm_arn),
        urlencoding::encode(alarm_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_from_full_arn() {
        assert_eq!(
            region_of("arn:aws:cloudwatch:us-east-1:123456789012:alarm:High CPU"),
            "us-east-1"
        );
    }

    #[test]
    fn region_from_truncated_arn() {
        assert_eq!(region_of("arn:aws:cloudwatch:ap-northeast-2:"), "ap-northeast-2");
    }

    #[test]
    fn region_from_empty_arn() {
        assert_eq!(region_of(""), "");
    }

    #[test]
    fn console_url_encodes_name() {
        let url = console_url("arn:aws:cloudwatch:ap-northeast-2:", "My Alarm");
        assert_eq!(
            url,
            "https://ap-northeast-2.console.aws.amazon.com/cloudwatch/home\
             ?region=ap-northeast-2#alarmsV2:alarm/My%20Alarm"
        );
    }

    #[test]
    fn console_url_encodes_brackets_and_unicode() {
        let url = console_url(
            "arn:aws:cloudwatch:eu-west-1:123456789012:alarm:x",
            "[PROD] 디스크/사용량",
        );
        assert!(url.contains("?region=eu-west-1#"));
        assert!(url.ends_with("alarm/%5BPROD%5D%20%EB%94%94%EC%8A%A4%ED%81%AC%2F%EC%82%AC%EC%9A%A9%EB%9F%89"));
    }
}
