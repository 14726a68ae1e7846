//! Thai/English string table.
//!
//! Every key has both translations; a missing one is a compile error rather
//! than a blank label at runtime.

use crate::domain::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    SchoolName,
    FormTitle,
    FormDate,
    FormInstructions,
    ParentInfo,
    ParentNote,
    AddParent,
    Remove,
    Parent,
    Title,
    SelectTitle,
    FullName,
    Phone,
    StudentInfo,
    StudentNote,
    AddStudent,
    Student,
    Program,
    SelectProgram,
    Class,
    SelectClass,
    AttendanceTitle,
    Attending,
    NotAttending,
    Submit,
    AdminLogin,
    Username,
    Password,
    Login,
    Logout,
    AdminDashboard,
    Submissions,
    FilterByProgram,
    AllPrograms,
    SubmissionDate,
    Actions,
    Edit,
    Delete,
    AddSubmission,
    EditSubmission,
    Save,
    Cancel,
    RefreshData,
    NoSubmissions,
    // Notification texts.
    IncompleteTitle,
    IncompleteText,
    ConfigIncompleteTitle,
    ConfigIncompleteText,
    SubmitSuccessTitle,
    SubmitSuccessText,
    ErrorOccurred,
    SubmitFailedPrefix,
    LoadFailedTitle,
    ErrorTitle,
    DeleteFailedPrefix,
    ConfirmDeleteTitle,
    ConfirmDeleteText,
    ConfirmDeleteButton,
    DeletedTitle,
    DeletedText,
    EditUnavailableTitle,
    EditUnavailableText,
    AddUnavailableTitle,
    AddUnavailableText,
    LoginSuccess,
    InvalidCredentialsTitle,
    InvalidCredentialsText,
    LoginRequiredTitle,
    LoginRequiredText,
}

impl Text {
    /// `(thai, english)` pair for the key.
    pub fn pair(self) -> (&'static str, &'static str) {
        match self {
            Text::SchoolName => ("โรงเรียนสาธิตอุดมศึกษา", "Satit Udomseuksa School"),
            Text::FormTitle => (
                "แบบตอบรับการเข้าร่วมประชุมผู้ปกครอง",
                "Parent-Teacher Conference RSVP Form",
            ),
            Text::FormDate => ("วันเสาร์ที่ 8 พฤศจิกายน 2568", "Saturday, 8th November 2025"),
            Text::FormInstructions => (
                "กรุณากรอกข้อมูลต่อไปนี้ให้ครบถ้วน",
                "Please complete the following information.",
            ),
            Text::ParentInfo => ("ข้อมูลผู้ปกครอง", "Parent Information"),
            Text::ParentNote => (
                "โปรดระบุข้อมูลผู้ปกครองที่เข้าร่วมทั้งหมดให้ชัดเจน (เพิ่มได้สูงสุด 3 คน)",
                "Please provide clear information for all attending parents (max 3).",
            ),
            Text::AddParent => ("เพิ่มผู้ปกครอง", "Add Parent"),
            Text::Remove => ("ลบ", "Remove"),
            Text::Parent => ("ผู้ปกครอง", "Parent"),
            Text::Title => ("คำนำหน้าชื่อ", "Title"),
            Text::SelectTitle => ("เลือกคำนำหน้า...", "Select Title..."),
            Text::FullName => ("ชื่อ-สกุล", "Full Name"),
            Text::Phone => ("เบอร์โทรศัพท์", "Phone Number"),
            Text::StudentInfo => ("ข้อมูลนักเรียน", "Student Information"),
            Text::StudentNote => ("เพิ่มได้สูงสุด 3 คน", "Max 3 students"),
            Text::AddStudent => ("เพิ่มนักเรียน", "Add Student"),
            Text::Student => ("นักเรียน", "Student"),
            Text::Program => ("โปรแกรมการเรียน", "Learning Program"),
            Text::SelectProgram => ("เลือกโปรแกรม...", "Select Program..."),
            Text::Class => ("ห้องเรียน", "Class"),
            Text::SelectClass => ("เลือกห้องเรียน...", "Select Class..."),
            Text::AttendanceTitle => (
                "ท่านจะเข้าร่วมการประชุมผู้ปกครองในวันที่ 8 พฤศจิกายน 2568 หรือไม่?",
                "Will you attend the parent-teacher conference on November 8, 2025?",
            ),
            Text::Attending => ("เข้าร่วม", "Will Attend"),
            Text::NotAttending => ("ไม่สามารถเข้าร่วมได้", "Cannot Attend"),
            Text::Submit => ("ส่งข้อมูล", "Submit"),
            Text::AdminLogin => ("เข้าสู่ระบบผู้ดูแล", "Admin Login"),
            Text::Username => ("ชื่อผู้ใช้", "Username"),
            Text::Password => ("รหัสผ่าน", "Password"),
            Text::Login => ("เข้าสู่ระบบ", "Login"),
            Text::Logout => ("ออกจากระบบ", "Logout"),
            Text::AdminDashboard => ("แดชบอร์ดผู้ดูแลระบบ", "Admin Dashboard"),
            Text::Submissions => ("ข้อมูลที่ส่งเข้ามา", "Submissions"),
            Text::FilterByProgram => ("กรองตามโปรแกรม", "Filter by Program"),
            Text::AllPrograms => ("ทุกโปรแกรม", "All Programs"),
            Text::SubmissionDate => ("วันที่ส่ง", "Submission Date"),
            Text::Actions => ("การกระทำ", "Actions"),
            Text::Edit => ("แก้ไข", "Edit"),
            Text::Delete => ("ลบ", "Delete"),
            Text::AddSubmission => ("เพิ่มข้อมูลใหม่", "Add New Entry"),
            Text::EditSubmission => ("แก้ไขข้อมูล", "Edit Entry"),
            Text::Save => ("บันทึก", "Save"),
            Text::Cancel => ("ยกเลิก", "Cancel"),
            Text::RefreshData => ("โหลดข้อมูลใหม่", "Refresh Data"),
            Text::NoSubmissions => ("ไม่พบข้อมูล", "No submissions found."),
            Text::IncompleteTitle => ("ข้อมูลไม่ครบถ้วน", "Incomplete Information"),
            Text::IncompleteText => (
                "กรุณากรอกข้อมูลที่จำเป็นทั้งหมด",
                "Please fill in all required fields.",
            ),
            Text::ConfigIncompleteTitle => ("การตั้งค่าไม่สมบูรณ์", "Configuration Incomplete"),
            Text::ConfigIncompleteText => (
                "กรุณาตั้งค่า URL ของระบบจัดเก็บข้อมูลก่อน",
                "Please set the storage endpoint URL first.",
            ),
            Text::SubmitSuccessTitle => ("ส่งข้อมูลสำเร็จ", "Submission Successful"),
            Text::SubmitSuccessText => ("ขอบคุณสำหรับการตอบรับ", "Thank you for your response."),
            Text::ErrorOccurred => ("เกิดข้อผิดพลาด", "An Error Occurred"),
            Text::SubmitFailedPrefix => ("ไม่สามารถส่งข้อมูลได้", "Could not submit data"),
            Text::LoadFailedTitle => ("ไม่สามารถโหลดข้อมูลได้", "Failed to Load Data"),
            Text::ErrorTitle => ("เกิดข้อผิดพลาด", "Error"),
            Text::DeleteFailedPrefix => ("ไม่สามารถลบข้อมูลได้", "Could not delete entry"),
            Text::ConfirmDeleteTitle => ("คุณแน่ใจหรือไม่?", "Are you sure?"),
            Text::ConfirmDeleteText => (
                "คุณจะไม่สามารถกู้คืนข้อมูลนี้ได้!",
                "You won't be able to revert this!",
            ),
            Text::ConfirmDeleteButton => ("ใช่, ลบเลย!", "Yes, delete it!"),
            Text::DeletedTitle => ("ลบแล้ว!", "Deleted!"),
            Text::DeletedText => ("ข้อมูลถูกลบเรียบร้อยแล้ว", "The entry has been deleted."),
            Text::EditUnavailableTitle => ("ฟังก์ชันแก้ไข", "Edit Function"),
            Text::EditUnavailableText => (
                "ฟังก์ชันแก้ไขยังไม่เปิดใช้งานในเวอร์ชันนี้",
                "The edit functionality is not implemented in this version.",
            ),
            Text::AddUnavailableTitle => ("ฟังก์ชันเพิ่มข้อมูล", "Add Function"),
            Text::AddUnavailableText => (
                "ฟังก์ชันเพิ่มข้อมูลยังไม่เปิดใช้งานในเวอร์ชันนี้",
                "The add functionality is not implemented in this version.",
            ),
            Text::LoginSuccess => ("เข้าสู่ระบบสำเร็จ", "Login Successful"),
            Text::InvalidCredentialsTitle => ("ข้อมูลไม่ถูกต้อง", "Invalid Credentials"),
            Text::InvalidCredentialsText => (
                "ชื่อผู้ใช้หรือรหัสผ่านไม่ถูกต้อง",
                "Incorrect username or password.",
            ),
            Text::LoginRequiredTitle => ("กรุณาเข้าสู่ระบบ", "Login Required"),
            Text::LoginRequiredText => (
                "กรุณาเข้าสู่ระบบผู้ดูแลก่อนจัดการข้อมูล",
                "Please log in as an administrator first.",
            ),
        }
    }

    pub fn get(self, language: Language) -> &'static str {
        let (thai, english) = self.pair();
        match language {
            Language::Thai => thai,
            Language::English => english,
        }
    }
}

/// Shorthand for `key.get(language)`.
pub fn t(key: Text, language: Language) -> &'static str {
    key.get(language)
}
