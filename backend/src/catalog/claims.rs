//! Claims shown on the dashboard

use crate::claims::{Claim, ClaimDocument, ClaimNote, ClaimStatus, NoteType, SubrogationFlag};
use crate::models::{DocumentType, FlagType};
use chrono::{NaiveDate, NaiveDateTime};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn at(day: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
    day.and_hms_opt(h, min, 0).unwrap_or(NaiveDateTime::MIN)
}

fn flag(flag_type: FlagType, confidence: f64, reasoning: &str, phrase: &str, source: &str) -> SubrogationFlag {
    SubrogationFlag {
        flag_type,
        confidence,
        reasoning: reasoning.to_string(),
        highlighted_text: phrase.to_string(),
        document_source: source.to_string(),
    }
}

fn pdf_doc(id: &str, doc_type: DocumentType, title: &str, file: &str, text: &str) -> ClaimDocument {
    ClaimDocument {
        id: id.to_string(),
        doc_type,
        title: title.to_string(),
        content: format!("{}{}", crate::claims::PDF_ASSET_PREFIX, file),
        extracted_text: Some(text.to_string()),
        highlights: Vec::new(),
    }
}

fn note(id: &str, author: &str, when: NaiveDateTime, content: &str, note_type: NoteType) -> ClaimNote {
    ClaimNote {
        id: id.to_string(),
        author: author.to_string(),
        timestamp: when,
        content: content.to_string(),
        note_type,
    }
}

/// The six dashboard claims
pub fn demo_claims() -> Vec<Claim> {
    let d1 = date(2024, 1, 15);
    let d4 = date(2024, 1, 25);
    let d6 = date(2024, 2, 5);

    vec![
        Claim {
            id: "1".to_string(),
            claim_number: "CLM-2024-0001".to_string(),
            member_name: "Sarah Johnson".to_string(),
            date_of_service: d1,
            provider: "Metro General Hospital".to_string(),
            total_amount: 1_575_000,
            status: ClaimStatus::FlaggedOpportunity,
            confidence: 0.89,
            subrogation_flag: Some(flag(
                FlagType::AutoAccident,
                0.89,
                "Member was injured in an auto accident while at work",
                "Member was injured in an auto accident while at work",
                "Provider Emergency Department Note",
            )),
            documents: vec![pdf_doc(
                "doc1",
                DocumentType::ProviderNote,
                "Provider Claim Note - Auto Accident",
                "Provider_Claim_Note_AutoAccident.pdf",
                "Patient Sarah Johnson presented to ED at 14:30 following motor vehicle accident. \
                 Member was injured in an auto accident while at work. Patient reports being \
                 rear-ended at intersection while driving company vehicle. Sustained whiplash \
                 injury and lower back pain. Treatment provided for acute cervical strain and \
                 lumbar sprain.",
            )],
            notes: vec![note(
                "note1",
                "Dr. Michael Chen",
                at(d1, 14, 30),
                "MVA at workplace - potential third-party liability and workers comp coordination",
                NoteType::ProviderNote,
            )],
        },
        Claim {
            id: "2".to_string(),
            claim_number: "CLM-2024-0002".to_string(),
            member_name: "David Rodriguez".to_string(),
            date_of_service: date(2024, 1, 20),
            provider: "Riverside Orthopedic Clinic".to_string(),
            total_amount: 850_000,
            status: ClaimStatus::LowConfidence,
            confidence: 0.45,
            subrogation_flag: Some(flag(
                FlagType::WorkplaceInjury,
                0.45,
                "Mention of work-related activity but ambiguous context",
                "injury occurred during team building exercise",
                "Initial Assessment Note",
            )),
            documents: vec![pdf_doc(
                "doc2",
                DocumentType::MemberLetter,
                "Member Letter - Workplace Accident",
                "Member_Letter_WorkplaceAccident.pdf",
                "Patient David Rodriguez presents with right shoulder injury. Reports that \
                 injury occurred during team building exercise organized by employer. However, \
                 exercise was voluntary and off-site recreational activity. Diagnosed with \
                 rotator cuff strain.",
            )],
            notes: Vec::new(),
        },
        Claim {
            id: "3".to_string(),
            claim_number: "CLM-2024-0003".to_string(),
            member_name: "Jennifer Martinez".to_string(),
            date_of_service: date(2024, 1, 18),
            provider: "Central Family Practice".to_string(),
            total_amount: 45_000,
            status: ClaimStatus::Cleared,
            confidence: 0.95,
            subrogation_flag: None,
            documents: vec![ClaimDocument {
                id: "doc3".to_string(),
                doc_type: DocumentType::ProviderNote,
                title: "Annual Physical Examination".to_string(),
                content: "Routine annual physical examination for 34-year-old female. No acute \
                          complaints. All systems reviewed and within normal limits. Preventive \
                          care provided."
                    .to_string(),
                extracted_text: None,
                highlights: Vec::new(),
            }],
            notes: Vec::new(),
        },
        Claim {
            id: "4".to_string(),
            claim_number: "CLM-2024-0004".to_string(),
            member_name: "Michael Thompson".to_string(),
            date_of_service: d4,
            provider: "Downtown Medical Center".to_string(),
            total_amount: 320_000,
            status: ClaimStatus::FlaggedOpportunity,
            confidence: 0.91,
            subrogation_flag: Some(flag(
                FlagType::ThirdPartyLiability,
                0.91,
                "Slip and fall incident on commercial property with clear liability indicators",
                "wet floor with no warning signs",
                "Provider Claim Note - Fall Incident",
            )),
            documents: vec![pdf_doc(
                "doc4",
                DocumentType::ProviderNote,
                "Provider Claim Note - Fall",
                "Provider_Claim_Note_Fall.pdf",
                "Patient Michael Thompson, age 42, sustained injuries from fall at grocery store. \
                 Patient reports slipping on wet floor with no warning signs posted. Sustained \
                 fractured left wrist and contusions. Property owner liability investigation \
                 recommended.",
            )],
            notes: vec![note(
                "note4",
                "Dr. Lisa Wang",
                at(d4, 16, 45),
                "Clear premises liability case - recommend immediate subrogation pursuit",
                NoteType::ProviderNote,
            )],
        },
        Claim {
            id: "5".to_string(),
            claim_number: "CLM-2024-0005".to_string(),
            member_name: "Robert Davis".to_string(),
            date_of_service: date(2024, 1, 30),
            provider: "Occupational Health Services".to_string(),
            total_amount: 185_000,
            status: ClaimStatus::LowConfidence,
            confidence: 0.35,
            subrogation_flag: Some(flag(
                FlagType::WorkplaceInjury,
                0.35,
                "Work-related context but covered under existing employer benefits",
                "on approved sick leave when injury occurred",
                "Employer Letter - Sick Leave",
            )),
            documents: vec![pdf_doc(
                "doc5",
                DocumentType::PolicyExcerpt,
                "Employer Letter - Sick Leave Policy",
                "Employer_Letter_SickLeave.pdf",
                "Employee Robert Davis was on approved sick leave when injury occurred. Per \
                 company policy, all medical expenses during approved leave periods are covered \
                 under standard health benefits with no coordination of benefits required.",
            )],
            notes: Vec::new(),
        },
        Claim {
            id: "6".to_string(),
            claim_number: "CLM-2024-0006".to_string(),
            member_name: "Amanda Wilson".to_string(),
            date_of_service: d6,
            provider: "Regional Urgent Care".to_string(),
            total_amount: 95_000,
            status: ClaimStatus::FlaggedOpportunity,
            confidence: 0.78,
            subrogation_flag: Some(flag(
                FlagType::CoordinationOfBenefits,
                0.78,
                "Dual insurance coverage detected requiring coordination of benefits",
                "secondary coverage through spouse employer plan",
                "COB Clause - Auto Insurance",
            )),
            documents: vec![pdf_doc(
                "doc6",
                DocumentType::PolicyExcerpt,
                "COB Clause - Auto Insurance Policy",
                "COB_Clause_AutoInsurance.pdf",
                "Policy holder Amanda Wilson has secondary coverage through spouse employer plan. \
                 Coordination of Benefits clause requires primary insurer determination before \
                 processing claims. Auto insurance may be primary for motor vehicle related \
                 injuries.",
            )],
            notes: vec![note(
                "note6",
                "Claims Analyst",
                at(d6, 11, 20),
                "COB investigation required - potential auto insurance primary coverage",
                NoteType::SystemNote,
            )],
        },
    ]
}
