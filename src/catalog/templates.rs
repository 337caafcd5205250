use super::FieldKind::{Date, Text, TextArea};
use super::{FieldSpec, FieldValues, Icon, Template};

pub(super) static BUILTIN: [Template; 6] = [
    Template {
        id: "official-email",
        title: "Official Email",
        description: "Professional email for business correspondence.",
        icon: Icon::Mail,
        fields: &[
            FieldSpec::required("recipientName", "Recipient Name", Text),
            FieldSpec::required("companyName", "Company Name", Text),
            FieldSpec::required("subject", "Subject", Text),
            FieldSpec::required("message", "Message Body", TextArea),
            FieldSpec::required("senderName", "Your Name", Text),
            FieldSpec::required("senderTitle", "Your Job Title", Text),
        ],
        prompt: official_email,
    },
    Template {
        id: "emergency-leave",
        title: "Emergency Leave Request",
        description: "Formal emergency leave email.",
        icon: Icon::AlertCircle,
        fields: &[
            FieldSpec::required("managerName", "Manager Name", Text),
            FieldSpec::required("startDate", "Start Date", Date),
            FieldSpec::required("endDate", "End Date", Date),
            FieldSpec::required("reason", "Reason", TextArea),
            FieldSpec::required("senderName", "Your Name", Text),
        ],
        prompt: emergency_leave,
    },
    Template {
        id: "annual-leave",
        title: "Annual Leave Request",
        description: "Formal request for planned annual leave.",
        icon: Icon::Mail,
        fields: &[
            FieldSpec::required("managerName", "Manager Name", Text),
            FieldSpec::required("startDate", "Start Date", Date),
            FieldSpec::required("endDate", "End Date", Date),
            FieldSpec::optional("reason", "Reason (Optional)", TextArea),
            FieldSpec::required("senderName", "Your Name", Text),
        ],
        prompt: annual_leave,
    },
    Template {
        id: "medical-leave",
        title: "Medical Leave Submission",
        description: "Email to submit a medical certificate and request leave.",
        icon: Icon::Stethoscope,
        fields: &[
            FieldSpec::required("managerName", "Manager Name", Text),
            FieldSpec::required("mcDate", "Date of MC", Date),
            FieldSpec::optional("diagnosis", "Diagnosis / Reason (Optional)", Text),
            FieldSpec::required("senderName", "Your Name", Text),
        ],
        prompt: medical_leave,
    },
    Template {
        id: "meeting-minutes",
        title: "Meeting Minutes",
        description: "Record notes and decisions from a meeting.",
        icon: Icon::Clipboard,
        fields: &[
            FieldSpec::required("meetingTitle", "Meeting Title", Text),
            FieldSpec::required("date", "Date", Date),
            FieldSpec::required("attendees", "Attendees", TextArea),
            FieldSpec::required("agenda", "Agenda Items", TextArea),
            FieldSpec::required("decisions", "Key Decisions", TextArea),
            FieldSpec::required("actionItems", "Action Items", TextArea),
        ],
        prompt: meeting_minutes,
    },
    Template {
        id: "project-update",
        title: "Project Update",
        description: "Send a quick update on project progress.",
        icon: Icon::Clipboard,
        fields: &[
            FieldSpec::required("recipientName", "Recipient Name", Text),
            FieldSpec::required("projectName", "Project Name", Text),
            FieldSpec::required("progress", "Progress Summary", TextArea),
            FieldSpec::required("nextSteps", "Next Steps", TextArea),
            FieldSpec::required("senderName", "Your Name", Text),
        ],
        prompt: project_update,
    },
];

fn official_email(v: &FieldValues) -> String {
    format!(
        "Write a professional email with the following details:\n\n\
         Recipient: {}\n\
         Company: {}\n\
         Subject: {}\n\
         Message: {}\n\
         Sender: {}, {}",
        v.get("recipientName"),
        v.get("companyName"),
        v.get("subject"),
        v.get("message"),
        v.get("senderName"),
        v.get("senderTitle"),
    )
}

fn emergency_leave(v: &FieldValues) -> String {
    leave_request("Write a formal emergency leave email:", v, v.get("reason"))
}

fn annual_leave(v: &FieldValues) -> String {
    leave_request("Write a formal annual leave request email:", v, v.or_na("reason"))
}

fn leave_request(header: &str, v: &FieldValues, reason: &str) -> String {
    format!(
        "{header}\n\n\
         Manager: {}\n\
         From: {}\n\
         Leave period: {} to {}\n\
         Reason: {reason}",
        v.get("managerName"),
        v.get("senderName"),
        v.get("startDate"),
        v.get("endDate"),
    )
}

fn medical_leave(v: &FieldValues) -> String {
    format!(
        "Write a medical leave email:\n\n\
         Manager: {}\n\
         From: {}\n\
         MC Date: {}\n\
         Diagnosis / Reason: {}",
        v.get("managerName"),
        v.get("senderName"),
        v.get("mcDate"),
        v.or_na("diagnosis"),
    )
}

fn meeting_minutes(v: &FieldValues) -> String {
    format!(
        "Write meeting minutes:\n\n\
         Meeting: {}\n\
         Date: {}\n\
         Attendees: {}\n\
         Agenda: {}\n\
         Decisions: {}\n\
         Action Items: {}",
        v.get("meetingTitle"),
        v.get("date"),
        v.get("attendees"),
        v.get("agenda"),
        v.get("decisions"),
        v.get("actionItems"),
    )
}

fn project_update(v: &FieldValues) -> String {
    format!(
        "Write a project update email:\n\n\
         To: {}\n\
         Project: {}\n\
         Progress: {}\n\
         Next Steps: {}\n\
         From: {}",
        v.get("recipientName"),
        v.get("projectName"),
        v.get("progress"),
        v.get("nextSteps"),
        v.get("senderName"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emergency_leave_layout() {
        let values: FieldValues = [
            ("managerName", "Dana"),
            ("startDate", "2026-10-20"),
            ("endDate", "2026-10-22"),
            ("reason", "Family emergency"),
            ("senderName", "Sam"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            emergency_leave(&values),
            "Write a formal emergency leave email:\n\n\
             Manager: Dana\n\
             From: Sam\n\
             Leave period: 2026-10-20 to 2026-10-22\n\
             Reason: Family emergency"
        );
    }

    #[test]
    fn sender_line_joins_name_and_title() {
        let values: FieldValues = [("senderName", "Bob"), ("senderTitle", "Manager")]
            .into_iter()
            .collect();
        assert!(official_email(&values).ends_with("Sender: Bob, Manager"));
    }
}
