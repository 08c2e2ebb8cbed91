//! Form state, validation rules and request shaping.
//!
//! DESIGN
//! ======
//! Form structs hold raw input strings exactly as bound to the page inputs.
//! Conversions into wire records validate first and return every failed rule
//! at once so pages can show them together.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::sync::LazyLock;

use regex::Regex;
use time::Date;
use time::macros::format_description;

use crate::error::FieldError;
use crate::model::{Event, FileDocument, LoginRequest, Project, Role, SignupRequest, User, UserStatus, UserUpdate};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("email pattern")
});
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]+$").expect("phone pattern"));
static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://(www\.)?linkedin\.com/.*$").expect("linkedin pattern"));

/// Largest accepted profile photo, inclusive.
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;
/// Largest accepted document upload, inclusive.
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted for document uploads.
pub const DOCUMENT_MIME_TYPES: [&str; 4] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// File type sent when the form leaves it blank.
pub const DEFAULT_UPLOAD_TYPE: &str = "other";

/// Select value meaning "use the custom type text input".
pub const CUSTOM_FILE_TYPE: &str = "custom";

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Parse `YYYY-MM-DD`, also accepting a full timestamp by its date part.
#[must_use]
pub fn parse_date(value: &str) -> Option<Date> {
    Date::parse(&date_part(value), format_description!("[year]-[month]-[day]")).ok()
}

/// Date portion of a backend timestamp (`2025-01-01T10:00:00` -> `2025-01-01`).
#[must_use]
pub fn date_part(value: &str) -> String {
    value.trim().split('T').next().unwrap_or_default().to_owned()
}

/// Backend `LocalDateTime` for a date input (`2025-01-01` -> `2025-01-01T00:00:00`).
#[must_use]
pub fn to_backend_datetime(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() || value.contains('T') {
        value.to_owned()
    } else {
        format!("{value}T00:00:00")
    }
}

/// Split a comma-separated input, trimming entries and dropping empties.
#[must_use]
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn blank_to_none(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{label} is required")));
    }
}

fn min_len(errors: &mut Vec<FieldError>, field: &'static str, value: &str, label: &str, min: usize) {
    let len = value.trim().chars().count();
    if len == 0 {
        errors.push(FieldError::new(field, format!("{label} is required")));
    } else if len < min {
        errors.push(FieldError::new(field, format!("{label} must be at least {min} characters")));
    }
}

fn check_email(errors: &mut Vec<FieldError>, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_valid_email(value) {
        errors.push(FieldError::new("email", "Enter a valid email address"));
    }
}

fn check_date_range(errors: &mut Vec<FieldError>, start: &str, end: &str) {
    for (field, value, label) in [("startDate", start, "Start date"), ("endDate", end, "End date")] {
        if value.trim().is_empty() {
            errors.push(FieldError::new(field, format!("{label} is required")));
        } else if parse_date(value).is_none() {
            errors.push(FieldError::new(field, format!("{label} must be YYYY-MM-DD")));
        }
    }
    if let (Some(start), Some(end)) = (parse_date(start), parse_date(end)) {
        if end < start {
            errors.push(FieldError::new("endDate", "End date must not be before start date"));
        }
    }
}

fn parse_min_f64(errors: &mut Vec<FieldError>, field: &'static str, value: &str, label: &str, min: f64) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(n) if n >= min => n,
        Ok(_) => {
            errors.push(FieldError::new(field, format!("{label} must be at least {min}")));
            0.0
        }
        Err(_) => {
            errors.push(FieldError::new(field, format!("{label} must be a number")));
            0.0
        }
    }
}

fn parse_min_u32(errors: &mut Vec<FieldError>, field: &'static str, value: &str, label: &str, min: u32) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(n) if n >= min => n,
        Ok(_) => {
            errors.push(FieldError::new(field, format!("{label} must be at least {min}")));
            0
        }
        Err(_) => {
            errors.push(FieldError::new(field, format!("{label} must be a whole number")));
            0
        }
    }
}

fn finish<T>(errors: Vec<FieldError>, value: T) -> Result<T, Vec<FieldError>> {
    if errors.is_empty() { Ok(value) } else { Err(errors) }
}

/// Rules for the login form.
#[must_use]
pub fn validate_login(req: &LoginRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_email(&mut errors, &req.email);
    require(&mut errors, "password", &req.password, "Password");
    errors
}

/// Rules for the registration form; only the LinkedIn URL is optional.
#[must_use]
pub fn validate_signup(req: &SignupRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(&mut errors, "firstName", &req.first_name, "First name");
    require(&mut errors, "lastName", &req.last_name, "Last name");
    check_email(&mut errors, &req.email);
    require(&mut errors, "password", &req.password, "Password");
    require(&mut errors, "dateOfBirth", &req.date_of_birth, "Date of birth");
    require(&mut errors, "phone", &req.phone, "Phone");
    require(&mut errors, "grade", &req.grade, "Grade");
    require(&mut errors, "institute", &req.institute, "Institute");
    require(&mut errors, "lastDiploma", &req.last_diploma, "Last diploma");
    require(&mut errors, "researchArea", &req.research_area, "Research area");
    errors
}

/// Trim a signup request and drop an empty LinkedIn URL.
#[must_use]
pub fn normalize_signup(mut req: SignupRequest) -> SignupRequest {
    req.email = req.email.trim().to_owned();
    req.first_name = req.first_name.trim().to_owned();
    req.last_name = req.last_name.trim().to_owned();
    req.linked_in_url = req.linked_in_url.as_deref().and_then(blank_to_none);
    req
}

/// Editable part of the user's own profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub grade: String,
    pub institute: String,
    pub last_diploma: String,
    pub research_area: String,
    pub linked_in_url: String,
}

impl ProfileForm {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            grade: user.grade.clone(),
            institute: user.institute.clone(),
            last_diploma: user.last_diploma.clone(),
            research_area: user.research_area.clone(),
            linked_in_url: user.linked_in_url.clone().unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        min_len(&mut errors, "firstName", &self.first_name, "First name", 2);
        min_len(&mut errors, "lastName", &self.last_name, "Last name", 2);
        if self.phone.trim().is_empty() {
            errors.push(FieldError::new("phone", "Phone is required"));
        } else if !PHONE_RE.is_match(self.phone.trim()) {
            errors.push(FieldError::new("phone", "Enter a valid phone number"));
        }
        require(&mut errors, "grade", &self.grade, "Grade");
        min_len(&mut errors, "institute", &self.institute, "Institute", 3);
        require(&mut errors, "lastDiploma", &self.last_diploma, "Last diploma");
        min_len(&mut errors, "researchArea", &self.research_area, "Research area", 10);
        let url = self.linked_in_url.trim();
        if !url.is_empty() && !LINKEDIN_RE.is_match(url) {
            errors.push(FieldError::new("linkedInUrl", "Enter a linkedin.com profile URL"));
        }
        errors
    }

    /// Validated body for `PUT /users/{email}`.
    ///
    /// # Errors
    ///
    /// Returns every failed rule.
    pub fn to_update(&self) -> Result<UserUpdate, Vec<FieldError>> {
        let update = UserUpdate {
            first_name: Some(self.first_name.trim().to_owned()),
            last_name: Some(self.last_name.trim().to_owned()),
            phone: Some(self.phone.trim().to_owned()),
            grade: Some(self.grade.trim().to_owned()),
            institute: Some(self.institute.trim().to_owned()),
            last_diploma: Some(self.last_diploma.trim().to_owned()),
            research_area: Some(self.research_area.trim().to_owned()),
            linked_in_url: blank_to_none(&self.linked_in_url),
            ..UserUpdate::default()
        };
        finish(self.validate(), update)
    }
}

/// Event create/edit form as bound to the inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventForm {
    pub event_name: String,
    pub location: String,
    pub budget: String,
    pub max_participants: String,
    /// Blank means "same as max participants".
    pub available_places: String,
    pub status: String,
    pub image: String,
    pub image_path: String,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    /// `YYYY-MM-DD`.
    pub end_date: String,
    pub description: String,
}

impl EventForm {
    /// Blank form for a new event with the default status.
    #[must_use]
    pub fn new_event() -> Self {
        Self { status: "UPCOMING".to_owned(), budget: "0".to_owned(), max_participants: "0".to_owned(), ..Self::default() }
    }

    /// Prefill from a stored event, trimming timestamps to their date part.
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            event_name: event.event_name.clone(),
            location: event.location.clone(),
            budget: event.budget.to_string(),
            max_participants: event.max_participants.to_string(),
            available_places: event.available_places.map(|n| n.to_string()).unwrap_or_default(),
            status: event.status.clone(),
            image: event.image.clone().unwrap_or_default(),
            image_path: event.image_path.clone().unwrap_or_default(),
            start_date: date_part(&event.start_date),
            end_date: date_part(&event.end_date),
            description: event.description.clone(),
        }
    }

    /// Validated wire event. Enrollment and creation time stay backend-managed.
    ///
    /// # Errors
    ///
    /// Returns every failed rule.
    pub fn to_event(&self) -> Result<Event, Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "eventName", &self.event_name, "Event name");
        require(&mut errors, "location", &self.location, "Location");
        require(&mut errors, "status", &self.status, "Status");
        require(&mut errors, "description", &self.description, "Description");
        let budget = parse_min_f64(&mut errors, "budget", &self.budget, "Budget", 1.0);
        let max_participants = parse_min_u32(&mut errors, "maxParticipants", &self.max_participants, "Max participants", 1);
        let available_places = if self.available_places.trim().is_empty() {
            max_participants
        } else {
            parse_min_u32(&mut errors, "availablePlaces", &self.available_places, "Available places", 0)
        };
        check_date_range(&mut errors, &self.start_date, &self.end_date);

        let event = Event {
            id: None,
            event_name: self.event_name.trim().to_owned(),
            location: self.location.trim().to_owned(),
            budget,
            max_participants,
            available_places: Some(available_places),
            status: self.status.trim().to_owned(),
            start_date: to_backend_datetime(&self.start_date),
            end_date: to_backend_datetime(&self.end_date),
            description: self.description.trim().to_owned(),
            image: blank_to_none(&self.image),
            image_path: blank_to_none(&self.image_path),
            enrolled_users: None,
            created_at: None,
        };
        finish(errors, event)
    }
}

/// Default cover image for projects created without one.
pub const DEFAULT_PROJECT_IMAGE: &str = "assets/default-project.jpg";

/// Project create/edit form as bound to the inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub project_name: String,
    pub description: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: String,
    pub max_team_members: String,
}

impl ProjectForm {
    #[must_use]
    pub fn new_project() -> Self {
        Self { status: "ACTIVE".to_owned(), budget: "0".to_owned(), max_team_members: "0".to_owned(), ..Self::default() }
    }

    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        Self {
            project_name: project.project_name.clone(),
            description: project.description.clone(),
            status: project.status.clone(),
            start_date: date_part(&project.start_date),
            end_date: date_part(&project.end_date),
            budget: project.budget.to_string(),
            max_team_members: project.max_team_members.to_string(),
        }
    }

    /// Validated wire project; `base` supplies the fields the form does not edit.
    ///
    /// # Errors
    ///
    /// Returns every failed rule.
    pub fn to_project(&self, base: Option<&Project>) -> Result<Project, Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "projectName", &self.project_name, "Project name");
        require(&mut errors, "description", &self.description, "Description");
        require(&mut errors, "status", &self.status, "Status");
        let budget = parse_min_f64(&mut errors, "budget", &self.budget, "Budget", 1.0);
        let max_team_members = parse_min_u32(&mut errors, "maxTeamMembers", &self.max_team_members, "Max team members", 1);
        check_date_range(&mut errors, &self.start_date, &self.end_date);

        let mut project = base.cloned().unwrap_or_else(|| Project {
            team_members: Some(Vec::new()),
            image_path: Some(DEFAULT_PROJECT_IMAGE.to_owned()),
            ..Project::default()
        });
        project.project_name = self.project_name.trim().to_owned();
        project.description = self.description.trim().to_owned();
        project.status = self.status.trim().to_owned();
        project.start_date = to_backend_datetime(&self.start_date);
        project.end_date = to_backend_datetime(&self.end_date);
        project.budget = budget;
        project.max_team_members = max_team_members;
        finish(errors, project)
    }
}

/// Which rule set a document metadata form is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadRules {
    /// File library and admin console.
    Library,
    /// Profile page: longer title and abstract, affiliations required.
    Profile,
}

/// Document metadata form; list fields are comma-separated text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileForm {
    pub title: String,
    pub authors: String,
    pub affiliations: String,
    pub keywords: String,
    /// `YYYY-MM-DD`.
    pub publication_date: String,
    pub abstract_text: String,
    pub doi: String,
    /// Selected type, or [`CUSTOM_FILE_TYPE`].
    pub file_type: String,
    pub custom_file_type: String,
}

impl FileForm {
    #[must_use]
    pub fn from_document(doc: &FileDocument) -> Self {
        Self {
            title: doc.title.clone().unwrap_or_default(),
            authors: doc.authors.join(", "),
            affiliations: doc.affiliations.join(", "),
            keywords: doc.keywords.join(", "),
            publication_date: doc.publication_date.as_deref().map(date_part).unwrap_or_default(),
            abstract_text: doc.abstract_text.clone().unwrap_or_default(),
            doi: doc.doi.clone().unwrap_or_default(),
            file_type: doc.file_type.clone().unwrap_or_default(),
            custom_file_type: String::new(),
        }
    }

    /// Effective type: the custom text when `custom` is selected.
    #[must_use]
    pub fn effective_type(&self) -> String {
        if self.file_type == CUSTOM_FILE_TYPE {
            self.custom_file_type.trim().to_owned()
        } else {
            self.file_type.trim().to_owned()
        }
    }

    /// Validated metadata for an upload or a metadata update.
    ///
    /// # Errors
    ///
    /// Returns every failed rule.
    pub fn to_metadata(&self, rules: UploadRules) -> Result<UploadMetadata, Vec<FieldError>> {
        let mut errors = Vec::new();
        let authors = split_list(&self.authors);
        let affiliations = split_list(&self.affiliations);
        let keywords = split_list(&self.keywords);
        let file_type = self.effective_type();

        match rules {
            UploadRules::Library => {
                require(&mut errors, "title", &self.title, "Title");
                require(&mut errors, "abstractText", &self.abstract_text, "Abstract");
                if keywords.is_empty() {
                    errors.push(FieldError::new("keywords", "Keywords are required"));
                }
                if file_type.is_empty() {
                    errors.push(FieldError::new("fileType", "Please select or enter a file type."));
                }
            }
            UploadRules::Profile => {
                min_len(&mut errors, "title", &self.title, "Title", 3);
                min_len(&mut errors, "abstractText", &self.abstract_text, "Abstract", 50);
                if affiliations.is_empty() {
                    errors.push(FieldError::new("affiliations", "Affiliations are required"));
                }
                if keywords.is_empty() {
                    errors.push(FieldError::new("keywords", "Keywords are required"));
                }
            }
        }
        if authors.is_empty() {
            errors.push(FieldError::new("authors", "Authors are required"));
        }
        if self.publication_date.trim().is_empty() {
            errors.push(FieldError::new("publicationDate", "Publication date is required"));
        } else if parse_date(&self.publication_date).is_none() {
            errors.push(FieldError::new("publicationDate", "Publication date must be YYYY-MM-DD"));
        }

        let metadata = UploadMetadata {
            title: self.title.trim().to_owned(),
            authors,
            affiliations,
            keywords,
            publication_date: self.publication_date.trim().to_owned(),
            abstract_text: self.abstract_text.trim().to_owned(),
            doi: blank_to_none(&self.doi),
            file_type: if file_type.is_empty() { DEFAULT_UPLOAD_TYPE.to_owned() } else { file_type },
        };
        finish(errors, metadata)
    }
}

/// Validated document metadata, sent as multipart fields on upload and as
/// JSON on metadata updates.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    pub title: String,
    pub authors: Vec<String>,
    pub affiliations: Vec<String>,
    pub keywords: Vec<String>,
    pub publication_date: String,
    pub abstract_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    pub file_type: String,
}

impl UploadMetadata {
    /// Multipart text fields in backend order; list fields repeat their key.
    #[must_use]
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("title", self.title.clone())];
        fields.extend(self.authors.iter().map(|a| ("authors", a.clone())));
        fields.extend(self.affiliations.iter().map(|a| ("affiliations", a.clone())));
        fields.extend(self.keywords.iter().map(|k| ("keywords", k.clone())));
        fields.push(("publicationDate", self.publication_date.clone()));
        fields.push(("abstractText", self.abstract_text.clone()));
        if let Some(doi) = &self.doi {
            fields.push(("doi", doi.clone()));
        }
        fields.push(("fileType", self.file_type.clone()));
        fields
    }
}

/// Admin console user form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Required only when creating.
    pub password: String,
    pub role: String,
    pub status: String,
    pub date_of_birth: String,
    pub phone: String,
    pub grade: String,
    pub institute: String,
    pub last_diploma: String,
    pub research_area: String,
}

impl UserForm {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role.as_str().to_owned(),
            status: user.status.as_str().to_owned(),
            date_of_birth: user.date_of_birth.clone(),
            phone: user.phone.clone(),
            grade: user.grade.clone(),
            institute: user.institute.clone(),
            last_diploma: user.last_diploma.clone(),
            research_area: user.research_area.clone(),
        }
    }

    #[must_use]
    pub fn validate(&self, creating: bool) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "firstName", &self.first_name, "First name");
        require(&mut errors, "lastName", &self.last_name, "Last name");
        check_email(&mut errors, &self.email);
        if creating {
            require(&mut errors, "password", &self.password, "Password");
        }
        require(&mut errors, "role", &self.role, "Role");
        require(&mut errors, "status", &self.status, "Status");
        require(&mut errors, "dateOfBirth", &self.date_of_birth, "Date of birth");
        require(&mut errors, "phone", &self.phone, "Phone");
        require(&mut errors, "grade", &self.grade, "Grade");
        require(&mut errors, "institute", &self.institute, "Institute");
        require(&mut errors, "lastDiploma", &self.last_diploma, "Last diploma");
        require(&mut errors, "researchArea", &self.research_area, "Research area");
        errors
    }

    /// Body for `PUT /users/{email}` when editing an existing account.
    ///
    /// # Errors
    ///
    /// Returns every failed rule.
    pub fn to_update(&self) -> Result<UserUpdate, Vec<FieldError>> {
        let update = UserUpdate {
            first_name: Some(self.first_name.trim().to_owned()),
            last_name: Some(self.last_name.trim().to_owned()),
            email: Some(self.email.trim().to_owned()),
            date_of_birth: Some(self.date_of_birth.trim().to_owned()),
            phone: Some(self.phone.trim().to_owned()),
            grade: Some(self.grade.trim().to_owned()),
            institute: Some(self.institute.trim().to_owned()),
            last_diploma: Some(self.last_diploma.trim().to_owned()),
            research_area: Some(self.research_area.trim().to_owned()),
            linked_in_url: None,
            role: blank_to_none(&self.role).map(Role::from),
            status: blank_to_none(&self.status).map(UserStatus::from),
        };
        finish(self.validate(false), update)
    }

    /// Signup body when the admin creates an account.
    ///
    /// # Errors
    ///
    /// Returns every failed rule.
    pub fn to_signup(&self) -> Result<SignupRequest, Vec<FieldError>> {
        let req = SignupRequest {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            date_of_birth: self.date_of_birth.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            grade: self.grade.trim().to_owned(),
            institute: self.institute.trim().to_owned(),
            last_diploma: self.last_diploma.trim().to_owned(),
            research_area: self.research_area.trim().to_owned(),
            linked_in_url: None,
        };
        finish(self.validate(true), req)
    }
}

/// Check a profile photo before upload.
///
/// # Errors
///
/// Returns a [`FieldError`] for non-image types or files above 5 MiB.
pub fn check_photo(mime: &str, size: u64) -> Result<(), FieldError> {
    if !mime.starts_with("image/") {
        return Err(FieldError::new("photo", "Please select a valid image file."));
    }
    if size > MAX_PHOTO_BYTES {
        return Err(FieldError::new("photo", "Image file size must be less than 5MB."));
    }
    Ok(())
}

/// Check a profile document before upload.
///
/// # Errors
///
/// Returns a [`FieldError`] for unsupported types or files above 10 MiB.
pub fn check_document(mime: &str, size: u64) -> Result<(), FieldError> {
    if !DOCUMENT_MIME_TYPES.contains(&mime) {
        return Err(FieldError::new("file", "Please select a valid document file (PDF, DOC, DOCX, TXT)."));
    }
    if size > MAX_DOCUMENT_BYTES {
        return Err(FieldError::new("file", "Document file size must be less than 10MB."));
    }
    Ok(())
}

/// Validate a document upload: the picked file (`(mime, size)`) and its
/// metadata. Profile uploads are also restricted in type and size.
///
/// # Errors
///
/// Returns every failed rule, file rules first.
pub fn prepare_upload(
    file: Option<(&str, u64)>,
    form: &FileForm,
    rules: UploadRules,
) -> Result<UploadMetadata, Vec<FieldError>> {
    let mut errors = Vec::new();
    match file {
        None => errors.push(FieldError::new("file", "Please select a file to upload.")),
        Some((mime, size)) if rules == UploadRules::Profile => {
            if let Err(err) = check_document(mime, size) {
                errors.push(err);
            }
        }
        Some(_) => {}
    }
    match form.to_metadata(rules) {
        Ok(meta) if errors.is_empty() => Ok(meta),
        Ok(_) => Err(errors),
        Err(more) => {
            errors.extend(more);
            Err(errors)
        }
    }
}
