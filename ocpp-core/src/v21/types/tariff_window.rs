use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::format::{FieldReader, FieldWriter, ParseError};

use super::{DayOfWeek, EvseKind};

const START_TIME_OF_DAY: &str = "startTimeOfDay";
const END_TIME_OF_DAY: &str = "endTimeOfDay";
const DAY_OF_WEEK: &str = "dayOfWeek";
const VALID_FROM_DATE: &str = "validFromDate";
const VALID_TO_DATE: &str = "validToDate";
const EVSE_KIND: &str = "evseKind";

/// The calendar part shared by `TariffConditions` and
/// `TariffConditionsFixed`: time of day, weekdays, validity dates and EVSE
/// kind. It has no JSON object of its own, its fields are written inline.
///
/// Weekdays are kept sorted and distinct.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TariffWindow {
    start_time_of_day: Option<NaiveTime>,
    end_time_of_day: Option<NaiveTime>,
    days_of_week: Vec<DayOfWeek>,
    valid_from_date: Option<NaiveDate>,
    valid_to_date: Option<NaiveDate>,
    evse_kind: Option<EvseKind>,
}

impl TariffWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn between(mut self, start: Option<NaiveTime>, end: Option<NaiveTime>) -> Self {
        self.start_time_of_day = start;
        self.end_time_of_day = end;
        self
    }

    pub fn on_days(mut self, days: impl IntoIterator<Item = DayOfWeek>) -> Self {
        let mut days: Vec<DayOfWeek> = days.into_iter().collect();
        days.sort();
        days.dedup();
        self.days_of_week = days;
        self
    }

    pub fn valid(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.valid_from_date = from;
        self.valid_to_date = to;
        self
    }

    pub fn for_evse_kind(mut self, evse_kind: Option<EvseKind>) -> Self {
        self.evse_kind = evse_kind;
        self
    }

    pub fn start_time_of_day(&self) -> Option<NaiveTime> {
        self.start_time_of_day
    }

    pub fn end_time_of_day(&self) -> Option<NaiveTime> {
        self.end_time_of_day
    }

    pub fn days_of_week(&self) -> &[DayOfWeek] {
        &self.days_of_week
    }

    pub fn valid_from_date(&self) -> Option<NaiveDate> {
        self.valid_from_date
    }

    pub fn valid_to_date(&self) -> Option<NaiveDate> {
        self.valid_to_date
    }

    pub fn evse_kind(&self) -> Option<EvseKind> {
        self.evse_kind
    }

    /// Whether `date` lies inside the validity dates and on one of the
    /// weekdays. `validToDate` is exclusive.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        let after_start = self.valid_from_date.is_none_or(|from| date >= from);
        let before_end = self.valid_to_date.is_none_or(|to| date < to);
        let on_day = self.days_of_week.is_empty()
            || self.days_of_week.contains(&DayOfWeek::from(date.weekday()));
        after_start && before_end && on_day
    }

    pub fn is_unrestricted(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn read(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self::new()
            .between(
                fields.optional_time_of_day(START_TIME_OF_DAY)?,
                fields.optional_time_of_day(END_TIME_OF_DAY)?,
            )
            .on_days(fields.optional_list::<DayOfWeek>(DAY_OF_WEEK)?)
            .valid(
                fields.optional_date(VALID_FROM_DATE)?,
                fields.optional_date(VALID_TO_DATE)?,
            )
            .for_evse_kind(fields.optional(EVSE_KIND)?))
    }

    pub(crate) fn write(&self, out: &mut FieldWriter<'_>) {
        out.put_opt_time_of_day(START_TIME_OF_DAY, self.start_time_of_day.as_ref());
        out.put_opt_time_of_day(END_TIME_OF_DAY, self.end_time_of_day.as_ref());
        out.put_nonempty_display_list(DAY_OF_WEEK, &self.days_of_week);
        out.put_opt_date(VALID_FROM_DATE, self.valid_from_date.as_ref());
        out.put_opt_date(VALID_TO_DATE, self.valid_to_date.as_ref());
        out.put_opt_display(EVSE_KIND, self.evse_kind.as_ref());
    }
}
