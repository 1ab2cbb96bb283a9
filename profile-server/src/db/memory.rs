//! In-memory repositories for service and router tests

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use shared::models::{
    CreateProfileRequest, Education, EducationCreate, Employment, EmploymentCreate, Profile, Skill,
    SkillCreate,
};

use super::{CollectionRepository, Entity, ProfilePatch, ProfileRepository, RepoError, RepoResult};

fn sample_profile(code: i64) -> Profile {
    Profile {
        profile_code: code,
        wanted_job_title: "Backend Engineer".into(),
        first_name: "Ada".into(),
        last_name: Some("Lovelace".into()),
        email: "ada@example.com".into(),
        phone: "+44 20 0000".into(),
        country: "UK".into(),
        city: "London".into(),
        address: "12 St James's Square".into(),
        postal_code: Some(10115),
        driving_license: None,
        nationality: Some("British".into()),
        place_of_birth: Some("London".into()),
        date_of_birth: None,
        photo_url: None,
        working_experience: None,
        created_at: Utc::now(),
        updated_at: None,
    }
}

#[derive(Default)]
pub struct MemoryProfileRepository {
    profiles: Mutex<BTreeMap<i64, Profile>>,
    fail: Mutex<Option<String>>,
}

impl MemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository holding one sample profile with the given code
    pub fn with_profile(code: i64) -> Self {
        let repo = Self::new();
        repo.profiles
            .lock()
            .unwrap()
            .insert(code, sample_profile(code));
        repo
    }

    /// Every following call fails with a database error carrying `msg`
    pub fn fail_with(&self, msg: &str) {
        *self.fail.lock().unwrap() = Some(msg.to_string());
    }

    pub fn profile(&self, code: i64) -> Option<Profile> {
        self.profiles.lock().unwrap().get(&code).cloned()
    }

    pub fn contains(&self, code: i64) -> bool {
        self.profiles.lock().unwrap().contains_key(&code)
    }

    fn check(&self) -> RepoResult<()> {
        match self.fail.lock().unwrap().as_ref() {
            Some(msg) => Err(RepoError::Database(msg.clone())),
            None => Ok(()),
        }
    }

    fn with_existing<R>(&self, code: i64, f: impl FnOnce(&mut Profile) -> R) -> RepoResult<R> {
        self.check()?;
        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles.get_mut(&code).ok_or(RepoError::NotFound {
            entity: Entity::Profile,
            key: code,
        })?;
        Ok(f(profile))
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepository {
    async fn get_by_code(&self, code: i64) -> RepoResult<Profile> {
        self.with_existing(code, |p| p.clone())
    }

    async fn get_working_experience(&self, code: i64) -> RepoResult<Option<String>> {
        self.with_existing(code, |p| p.working_experience.clone())
    }

    async fn create(&self, data: &CreateProfileRequest) -> RepoResult<i64> {
        self.check()?;
        let mut profiles = self.profiles.lock().unwrap();
        let code = profiles.keys().next_back().copied().unwrap_or(0) + 1;
        let profile = Profile {
            profile_code: code,
            wanted_job_title: data.wanted_job_title.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            country: data.country.clone(),
            city: data.city.clone(),
            address: data.address.clone(),
            postal_code: data.postal_code,
            driving_license: data.driving_license.clone(),
            nationality: data.nationality.clone(),
            place_of_birth: data.place_of_birth.clone(),
            date_of_birth: data.date_of_birth,
            photo_url: None,
            working_experience: None,
            created_at: Utc::now(),
            updated_at: None,
        };
        profiles.insert(code, profile);
        Ok(code)
    }

    async fn update(&self, code: i64, patch: &ProfilePatch) -> RepoResult<i64> {
        self.with_existing(code, |p| {
            let patch = patch.clone();
            fn apply<T>(slot: &mut T, value: Option<T>) {
                if let Some(v) = value {
                    *slot = v;
                }
            }
            apply(&mut p.wanted_job_title, patch.wanted_job_title);
            apply(&mut p.first_name, patch.first_name);
            apply(&mut p.email, patch.email);
            apply(&mut p.phone, patch.phone);
            apply(&mut p.country, patch.country);
            apply(&mut p.city, patch.city);
            apply(&mut p.address, patch.address);
            if patch.last_name.is_some() {
                p.last_name = patch.last_name;
            }
            if patch.postal_code.is_some() {
                p.postal_code = patch.postal_code;
            }
            if patch.driving_license.is_some() {
                p.driving_license = patch.driving_license;
            }
            if patch.nationality.is_some() {
                p.nationality = patch.nationality;
            }
            if patch.place_of_birth.is_some() {
                p.place_of_birth = patch.place_of_birth;
            }
            if patch.date_of_birth.is_some() {
                p.date_of_birth = patch.date_of_birth;
            }
            if patch.working_experience.is_some() {
                p.working_experience = patch.working_experience;
            }
            p.updated_at = Some(Utc::now());
            code
        })
    }

    async fn set_photo_url(&self, code: i64, photo_url: Option<&str>) -> RepoResult<()> {
        self.with_existing(code, |p| {
            p.photo_url = photo_url.map(str::to_string);
            p.updated_at = Some(Utc::now());
        })
    }
}

/// Row types stored by [`MemoryCollection`]
pub trait CollectionRow: Clone + Send + Sync + 'static {
    const ENTITY: Entity;
    type Create: Sync + 'static;

    fn build(id: i64, profile_code: i64, data: &Self::Create) -> Self;
    fn id(&self) -> i64;
    fn profile_code(&self) -> i64;
}

impl CollectionRow for Skill {
    const ENTITY: Entity = Entity::Skill;
    type Create = SkillCreate;

    fn build(id: i64, profile_code: i64, data: &SkillCreate) -> Self {
        Skill {
            id,
            profile_code,
            skill: data.skill.clone(),
            level: data.level.clone(),
            created_at: Utc::now(),
        }
    }
    fn id(&self) -> i64 {
        self.id
    }
    fn profile_code(&self) -> i64 {
        self.profile_code
    }
}

impl CollectionRow for Education {
    const ENTITY: Entity = Entity::Education;
    type Create = EducationCreate;

    fn build(id: i64, profile_code: i64, data: &EducationCreate) -> Self {
        Education {
            id,
            profile_code,
            school: data.school.clone(),
            degree: data.degree.clone(),
            start_date: data.start_date,
            end_date: data.end_date,
            city: data.city.clone(),
            description: data.description.clone(),
            created_at: Utc::now(),
        }
    }
    fn id(&self) -> i64 {
        self.id
    }
    fn profile_code(&self) -> i64 {
        self.profile_code
    }
}

impl CollectionRow for Employment {
    const ENTITY: Entity = Entity::Employment;
    type Create = EmploymentCreate;

    fn build(id: i64, profile_code: i64, data: &EmploymentCreate) -> Self {
        Employment {
            id,
            profile_code,
            job_title: data.job_title.clone(),
            employer: data.employer.clone(),
            start_date: data.start_date,
            end_date: data.end_date,
            city: data.city.clone(),
            description: data.description.clone(),
            created_at: Utc::now(),
        }
    }
    fn id(&self) -> i64 {
        self.id
    }
    fn profile_code(&self) -> i64 {
        self.profile_code
    }
}

/// Collection rows kept in a vector, with the profile table as foreign key
pub struct MemoryCollection<T> {
    rows: Mutex<Vec<T>>,
    profiles: Arc<MemoryProfileRepository>,
    fail: Mutex<Option<String>>,
}

impl<T: CollectionRow> MemoryCollection<T> {
    pub fn new(profiles: Arc<MemoryProfileRepository>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            profiles,
            fail: Mutex::new(None),
        }
    }

    pub fn fail_with(&self, msg: &str) {
        *self.fail.lock().unwrap() = Some(msg.to_string());
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> RepoResult<()> {
        match self.fail.lock().unwrap().as_ref() {
            Some(msg) => Err(RepoError::Database(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<T: CollectionRow> CollectionRepository<T, T::Create> for MemoryCollection<T> {
    async fn list_by_profile(&self, code: i64) -> RepoResult<Vec<T>> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| r.profile_code() == code)
            .cloned()
            .collect())
    }

    async fn create(&self, code: i64, data: &T::Create) -> RepoResult<i64> {
        self.check()?;
        if !self.profiles.contains(code) {
            return Err(RepoError::NotFound {
                entity: Entity::Profile,
                key: code,
            });
        }
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        rows.push(T::build(id, code, data));
        Ok(id)
    }

    async fn delete(&self, code: i64, id: i64) -> RepoResult<()> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.profile_code() == code && r.id() == id));
        if rows.len() == before {
            return Err(RepoError::NotFound {
                entity: T::ENTITY,
                key: id,
            });
        }
        Ok(())
    }
}
