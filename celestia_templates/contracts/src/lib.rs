use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

/// Shared partial rendering the submitted birth data, included by both
/// booking templates.
pub const BOOKING_DETAILS_TEMPLATE: &str = include_str!("../templates/booking_details.txt");

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = stringify!($ident);
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ContactConfirmationTemplate("contact_confirmation.txt"),
    ContactNotificationTemplate("contact_notification.txt"),
    BookingConfirmationTemplate("booking_confirmation.txt"),
    BookingNotificationTemplate("booking_notification.txt"),
}

/// Acknowledgement sent to the submitter of a contact inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactConfirmationTemplate {
    pub name: String,
    pub message: String,
}

/// Notification about a contact inquiry, sent to the astrologer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactNotificationTemplate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Formatted birth data of the person requesting a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingClientBlock {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub secondary_phone: String,
    pub dob: String,
    pub birth_time: String,
    pub birth_place: String,
}

/// Formatted birth data of the partner in a synastry reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingPartnerBlock {
    pub name: String,
    pub dob: String,
    pub birth_time: String,
    pub birth_place: String,
}

/// Acknowledgement sent to the client after a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConfirmationTemplate {
    pub service_title: String,
    pub client: BookingClientBlock,
    pub partner: Option<BookingPartnerBlock>,
}

/// Notification about a booking request, sent to the astrologer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingNotificationTemplate {
    pub service_title: String,
    pub client: BookingClientBlock,
    pub partner: Option<BookingPartnerBlock>,
}
