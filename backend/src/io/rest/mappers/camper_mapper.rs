//! Response shaping for campers.
//!
//! The abbreviated form is `{id, name, age}`. The full form adds the camper's
//! signups, each with its activity; nested signups drop their camper and nested
//! activities drop their signups and campers, so nothing expands recursively.

use super::activity_mapper::ActivityMapper;
use crate::domain::commands::camper::{CreateCamperCommand, UpdateCamperCommand};
use crate::domain::models::{Camper, CamperWithSignups, EnrolledSignup};
use shared::{CamperDetail, CamperSignup, CamperSummary, CreateCamperRequest, UpdateCamperRequest};

pub struct CamperMapper;

impl CamperMapper {
    pub fn to_create_command(dto: CreateCamperRequest) -> CreateCamperCommand {
        CreateCamperCommand {
            name: dto.name,
            age: dto.age,
        }
    }

    pub fn to_update_command(dto: UpdateCamperRequest) -> UpdateCamperCommand {
        UpdateCamperCommand {
            name: dto.name,
            age: dto.age,
        }
    }

    pub fn to_summary_dto(domain: Camper) -> CamperSummary {
        CamperSummary {
            id: domain.id,
            name: domain.name,
            age: domain.age,
        }
    }

    pub fn to_summary_list_dto(domain_campers: Vec<Camper>) -> Vec<CamperSummary> {
        domain_campers.into_iter().map(Self::to_summary_dto).collect()
    }

    pub fn to_detail_dto(domain: CamperWithSignups) -> CamperDetail {
        CamperDetail {
            id: domain.camper.id,
            name: domain.camper.name,
            age: domain.camper.age,
            signups: domain.signups.into_iter().map(Self::to_signup_dto).collect(),
        }
    }

    fn to_signup_dto(enrolled: EnrolledSignup) -> CamperSignup {
        CamperSignup {
            id: enrolled.signup.id,
            time: enrolled.signup.time,
            camper_id: enrolled.signup.camper_id,
            activity_id: enrolled.signup.activity_id,
            activity: ActivityMapper::to_dto(enrolled.activity),
        }
    }
}
