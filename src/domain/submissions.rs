use crate::domain::{RequiredText, SubscriberEmail};
use crate::transport::{FileAttachment, UploadForm};

/// Fields for creating or updating a project. The image is optional on update.
#[derive(Debug)]
pub struct ProjectSubmission {
    pub name: RequiredText,
    pub description: RequiredText,
    pub image: Option<FileAttachment>,
}

impl ProjectSubmission {
    pub fn parse(
        name: String,
        description: String,
        image: Option<FileAttachment>,
    ) -> Result<Self, String> {
        Ok(Self {
            name: RequiredText::parse(name, "Name")?,
            description: RequiredText::parse(description, "Description")?,
            image,
        })
    }

    pub fn into_upload_form(self) -> UploadForm {
        UploadForm::new()
            .text("name", self.name)
            .text("description", self.description)
            .attach(self.image)
    }
}

#[derive(Debug)]
pub struct ClientSubmission {
    pub name: RequiredText,
    pub description: RequiredText,
    pub designation: RequiredText,
    pub image: Option<FileAttachment>,
}

impl ClientSubmission {
    pub fn parse(
        name: String,
        description: String,
        designation: String,
        image: Option<FileAttachment>,
    ) -> Result<Self, String> {
        Ok(Self {
            name: RequiredText::parse(name, "Name")?,
            description: RequiredText::parse(description, "Description")?,
            designation: RequiredText::parse(designation, "Designation")?,
            image,
        })
    }

    pub fn into_upload_form(self) -> UploadForm {
        UploadForm::new()
            .text("name", self.name)
            .text("description", self.description)
            .text("designation", self.designation)
            .attach(self.image)
    }
}

/// Body of `POST /contacts`.
#[derive(Debug, serde::Serialize)]
pub struct NewContact {
    pub name: RequiredText,
    pub email: SubscriberEmail,
    pub mobile: RequiredText,
    pub city: RequiredText,
}

impl NewContact {
    pub fn parse(name: String, email: String, mobile: String, city: String) -> Result<Self, String> {
        Ok(Self {
            name: RequiredText::parse(name, "Name")?,
            email: SubscriberEmail::parse(email)?,
            mobile: RequiredText::parse(mobile, "Mobile")?,
            city: RequiredText::parse(city, "City")?,
        })
    }
}

/// Body of `POST /newsletters`.
#[derive(Debug, serde::Serialize)]
pub struct NewSubscriber {
    pub email: SubscriberEmail,
}
