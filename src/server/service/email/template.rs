//! Subjects and bodies for referral emails.

use crate::server::{
    model::{notification::Notification, referral::Referral, user::User},
    service::email::mailer::OutgoingEmail,
    util::text::title_case,
};

/// Escapes text for inclusion in an HTML body.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn or_not_provided(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("Not provided")
}

fn html_rows(rows: &[(&str, &str)]) -> String {
    rows.iter()
        .map(|(label, value)| {
            format!(
                "<tr><th align=\"left\">{}</th><td>{}</td></tr>",
                escape_html(label),
                escape_html(value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn text_rows(rows: &[(&str, &str)]) -> String {
    rows.iter()
        .map(|(label, value)| format!("- {}: {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn provider_notification_subject(referral: &Referral) -> String {
    format!(
        "New NDIS Referral #{} - {}",
        referral.id,
        title_case(&referral.referred_for)
    )
}

/// New referral details for the provider team.
pub fn provider_notification(referral: &Referral, to: &str) -> OutgoingEmail {
    let referral_id = format!("#{}", referral.id);
    let participant = referral.participant_name();
    let referred_for = title_case(&referral.referred_for);
    let urgency = title_case(referral.urgency_level.as_deref().unwrap_or("not specified"));
    let referrer = format!(
        "{} {}",
        referral.referrer_first_name, referral.referrer_last_name
    );

    let rows = [
        ("Referral ID", referral_id.as_str()),
        ("Participant", participant.as_str()),
        ("Date of Birth", referral.date_of_birth.as_str()),
        ("Phone", referral.phone_number.as_str()),
        ("Email", or_not_provided(referral.email_address.as_deref())),
        ("Preferred Contact", referral.preferred_contact.as_str()),
        ("Referred For", referred_for.as_str()),
        ("Urgency", urgency.as_str()),
        (
            "Disability Type",
            or_not_provided(referral.disability_type.as_deref()),
        ),
        ("Plan Type", referral.plan_type.as_str()),
        ("NDIS Number", or_not_provided(referral.ndis_number.as_deref())),
        ("Referrer", referrer.as_str()),
        ("Referrer Email", referral.referrer_email.as_str()),
        ("Referrer Phone", referral.referrer_phone.as_str()),
    ];

    let html = format!(
        "<h2>New NDIS Referral</h2>\n<table>\n{}\n</table>\n\
         <h3>Reason for Referral</h3>\n<p>{}</p>\n\
         <h3>Client Goals</h3>\n<p>{}</p>",
        html_rows(&rows),
        escape_html(&referral.reason_for_referral),
        escape_html(&referral.client_goals),
    );

    let text = format!(
        "A new NDIS referral has been submitted.\n\n{}\n\nReason for Referral:\n{}\n\nClient Goals:\n{}\n",
        text_rows(&rows),
        referral.reason_for_referral,
        referral.client_goals,
    );

    OutgoingEmail {
        to: to.to_string(),
        subject: provider_notification_subject(referral),
        text,
        html: Some(html),
    }
}

/// Submission receipt for the participant or their representative.
pub fn participant_confirmation(referral: &Referral, to: &str, sign_off: &str) -> OutgoingEmail {
    let subject = format!("NDIS Referral Confirmation - ID #{}", referral.id);
    let referred_for = title_case(&referral.referred_for);

    let text = format!(
        "Dear {first} {last},\n\n\
         We have received your NDIS referral for {referred_for}.\n\n\
         Your referral ID is #{id}. Please quote this number in any correspondence.\n\n\
         We will contact you within 2 business days using your preferred contact method ({contact}).\n\n\
         Kind regards,\n{sign_off}",
        first = referral.first_name,
        last = referral.last_name,
        referred_for = referred_for,
        id = referral.id,
        contact = referral.preferred_contact,
        sign_off = sign_off,
    );

    let html = format!(
        "<p>Dear {first} {last},</p>\n\
         <p>We have received your NDIS referral for <strong>{referred_for}</strong>.</p>\n\
         <p>Your referral ID is <strong>#{id}</strong>. Please quote this number in any correspondence.</p>\n\
         <p>We will contact you within 2 business days using your preferred contact method ({contact}).</p>\n\
         <p>Kind regards,<br>{sign_off}</p>",
        first = escape_html(&referral.first_name),
        last = escape_html(&referral.last_name),
        referred_for = escape_html(&referred_for),
        id = referral.id,
        contact = escape_html(&referral.preferred_contact),
        sign_off = escape_html(sign_off),
    );

    OutgoingEmail {
        to: to.to_string(),
        subject,
        text,
        html: Some(html),
    }
}

/// Plain-text acknowledgement for the referring professional.
pub fn referrer_notification(referral: &Referral, sign_off: &str) -> OutgoingEmail {
    let subject = format!("Referral #{} Submitted Successfully", referral.id);

    let text = format!(
        "Dear {referrer_first} {referrer_last},\n\n\
         Your NDIS referral for {client} has been successfully submitted.\n\n\
         Referral Details:\n\
         - Referral ID: #{id}\n\
         - Client: {client}\n\
         - Referred For: {referred_for}\n\
         - Submitted: {submitted}\n\n\
         The client will be contacted within 2 business days using their preferred contact method ({contact}).\n\n\
         Thank you for your referral.\n\n\
         Best regards,\n{sign_off}\n\n\
         ---\nThis is an automated notification. Please do not reply to this email.",
        referrer_first = referral.referrer_first_name,
        referrer_last = referral.referrer_last_name,
        client = referral.participant_name(),
        id = referral.id,
        referred_for = title_case(&referral.referred_for),
        submitted = referral.created_at.format("%B %d, %Y at %I:%M %p"),
        contact = referral.preferred_contact,
        sign_off = sign_off,
    );

    OutgoingEmail {
        to: referral.referrer_email.clone(),
        subject,
        text,
        html: None,
    }
}

/// Admin message to a provider, mirroring a stored provider notification.
pub fn provider_message(provider: &User, notification: &Notification) -> OutgoingEmail {
    let subject = format!(
        "[{}] {}",
        notification.priority.to_uppercase(),
        notification.title
    );
    let action = if notification.action_required {
        "\n\nAction is required on your part."
    } else {
        ""
    };

    let text = format!(
        "Dear {},\n\n{}{}\n",
        provider.full_name(),
        notification.message,
        action
    );

    OutgoingEmail {
        to: provider.email.clone(),
        subject,
        text,
        html: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<b>Tom & \"Jerry\"</b>"),
            "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn missing_values_read_not_provided() {
        assert_eq!(or_not_provided(None), "Not provided");
        assert_eq!(or_not_provided(Some("")), "Not provided");
        assert_eq!(or_not_provided(Some("1234")), "1234");
    }
}
